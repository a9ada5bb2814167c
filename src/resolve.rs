//! Field resolution: evaluate one directive against a line's words.
//!
//! Bounds checks live here, not in the normalizer, because only the resolver
//! sees the word list. Failures carry the offending reason and no line
//! number; the driver attaches one.

use crate::directive::Directive;
use crate::error::IndexError;

/// Evaluate a directive against the words of one line.
///
/// Substring directives may resolve to empty text (start past the end of the
/// word); the driver's non-empty invariant rejects that, not this function.
pub fn resolve(directive: &Directive, words: &[&str]) -> Result<String, IndexError> {
    match directive {
        Directive::WholeLine => Ok(words.join(" ")),
        Directive::WholeField(index) => field(*index, words).map(str::to_string),
        Directive::SubstringFromField { index, start } => {
            let word = field(*index, words)?;
            Ok(word.chars().skip(start.saturating_sub(1)).collect())
        }
        Directive::SubstringSliceField {
            index,
            start,
            length,
        } => {
            let word = field(*index, words)?;
            Ok(word
                .chars()
                .skip(start.saturating_sub(1))
                .take(*length)
                .collect())
        }
        Directive::FieldRange { from, to } => {
            let (from, to) = (*from, *to);
            let (lo, hi) = (from.min(to), from.max(to));
            if lo < 1 || hi > words.len() {
                return Err(IndexError::RangeOutOfRange {
                    lo,
                    hi,
                    word_count: words.len(),
                });
            }
            let span = &words[lo - 1..hi];
            if from > to {
                let reversed: Vec<&str> = span.iter().rev().copied().collect();
                Ok(reversed.join(" "))
            } else {
                Ok(span.join(" "))
            }
        }
    }
}

/// Look up a 1-based field, failing when the index is outside the line.
fn field<'a>(index: usize, words: &[&'a str]) -> Result<&'a str, IndexError> {
    if index < 1 || index > words.len() {
        return Err(IndexError::FieldOutOfRange {
            index,
            word_count: words.len(),
        });
    }
    Ok(words[index - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 3] = ["ABCDE", "12345", "MMMMM"];

    #[test]
    fn whole_field_returns_word_verbatim() {
        let result = resolve(&Directive::WholeField(1), &WORDS).unwrap();
        assert_eq!(result, "ABCDE");
    }

    #[test]
    fn whole_line_joins_with_single_spaces() {
        let result = resolve(&Directive::WholeLine, &WORDS).unwrap();
        assert_eq!(result, "ABCDE 12345 MMMMM");
    }

    #[test]
    fn whole_line_on_empty_line_is_empty() {
        let result = resolve(&Directive::WholeLine, &[]).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn substring_from_runs_to_end_of_word() {
        let directive = Directive::SubstringFromField { index: 1, start: 3 };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "CDE");
    }

    #[test]
    fn substring_from_past_end_is_empty() {
        let directive = Directive::SubstringFromField { index: 1, start: 9 };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "");
    }

    #[test]
    fn substring_slice_takes_length_chars() {
        let directive = Directive::SubstringSliceField {
            index: 2,
            start: 2,
            length: 2,
        };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "23");
    }

    #[test]
    fn substring_slice_from_word_start() {
        let directive = Directive::SubstringSliceField {
            index: 1,
            start: 1,
            length: 2,
        };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "AB");
    }

    #[test]
    fn substring_slice_clips_to_word_bounds() {
        let directive = Directive::SubstringSliceField {
            index: 1,
            start: 3,
            length: 99,
        };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "CDE");
    }

    #[test]
    fn substring_counts_chars_not_bytes() {
        let words = ["héllo", "wörld"];
        let directive = Directive::SubstringSliceField {
            index: 1,
            start: 2,
            length: 2,
        };
        assert_eq!(resolve(&directive, &words).unwrap(), "él");

        let directive = Directive::SubstringFromField { index: 2, start: 2 };
        assert_eq!(resolve(&directive, &words).unwrap(), "örld");
    }

    #[test]
    fn substring_propagates_field_failure() {
        let directive = Directive::SubstringFromField { index: 9, start: 1 };
        assert_eq!(
            resolve(&directive, &WORDS).unwrap_err(),
            IndexError::FieldOutOfRange {
                index: 9,
                word_count: 3,
            }
        );
    }

    #[test]
    fn field_zero_is_out_of_range() {
        let directive = Directive::SubstringFromField { index: 0, start: 2 };
        assert_eq!(
            resolve(&directive, &WORDS).unwrap_err(),
            IndexError::FieldOutOfRange {
                index: 0,
                word_count: 3,
            }
        );
    }

    #[test]
    fn forward_range_joins_in_order() {
        let directive = Directive::FieldRange { from: 1, to: 3 };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "ABCDE 12345 MMMMM");
    }

    #[test]
    fn reversed_range_reverses_span() {
        let directive = Directive::FieldRange { from: 3, to: 1 };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "MMMMM 12345 ABCDE");
    }

    #[test]
    fn single_field_range() {
        let directive = Directive::FieldRange { from: 2, to: 2 };
        assert_eq!(resolve(&directive, &WORDS).unwrap(), "12345");
    }

    #[test]
    fn range_checks_unordered_endpoints() {
        // Both orientations of an out-of-range pair fail identically.
        let expected = IndexError::RangeOutOfRange {
            lo: 1,
            hi: 9,
            word_count: 3,
        };
        let forward = Directive::FieldRange { from: 1, to: 9 };
        let reversed = Directive::FieldRange { from: 9, to: 1 };
        assert_eq!(resolve(&forward, &WORDS).unwrap_err(), expected);
        assert_eq!(resolve(&reversed, &WORDS).unwrap_err(), expected);
    }

    #[test]
    fn range_endpoint_zero_is_out_of_range() {
        let directive = Directive::FieldRange { from: 0, to: 2 };
        assert_eq!(
            resolve(&directive, &WORDS).unwrap_err(),
            IndexError::RangeOutOfRange {
                lo: 0,
                hi: 2,
                word_count: 3,
            }
        );
    }

    #[test]
    fn field_out_of_range() {
        assert_eq!(
            resolve(&Directive::WholeField(9), &WORDS).unwrap_err(),
            IndexError::FieldOutOfRange {
                index: 9,
                word_count: 3,
            }
        );
    }
}
