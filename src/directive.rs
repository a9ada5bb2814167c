/// The normalized, line-specific form of one field specifier.
///
/// A specifier token is classified into a directive only after `NF` has been
/// substituted with the current line's word count, so the same token can
/// normalize to different directives on different lines.
///
/// Field indices and character offsets are 1-based. Character offsets count
/// Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `0` - the whole line, words joined by single spaces
    WholeLine,
    /// `<n>` - the nth word
    WholeField(usize),
    /// `<n>.<start>` - the nth word from character `start` to its end
    SubstringFromField { index: usize, start: usize },
    /// `<n>.<start>.<length>` - up to `length` characters of the nth word,
    /// beginning at character `start`, clipped to the word's bounds
    SubstringSliceField {
        index: usize,
        start: usize,
        length: usize,
    },
    /// `<from>/<to>` - the inclusive span of words between two endpoints,
    /// emitted in reverse order when `from > to`
    FieldRange { from: usize, to: usize },
}
