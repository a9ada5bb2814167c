//! Specifier normalization: `NF` substitution and directive classification.
//!
//! A raw specifier token is normalized against one line at a time, because
//! `NF` resolves to that line's word count. Classification happens after
//! substitution, so `NF` works on either side of a `.` or `/`.

use winnow::ModalResult;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, opt, preceded};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;

use crate::directive::Directive;
use crate::error::MalformedSpecifier;

/// Normalize one raw specifier token against a line's word count.
pub fn normalize(token: &str, word_count: usize) -> Result<Directive, MalformedSpecifier> {
    let substituted = token.replace("NF", &word_count.to_string());
    specifier.parse(substituted.as_str()).map_err(|e| {
        let offset = e.offset();
        let message = if let Some(ctx) = e.inner().context().next() {
            match ctx {
                StrContext::Label(label) => format!("expected {}", label),
                StrContext::Expected(StrContextValue::Description(desc)) => {
                    format!("expected {}", desc)
                }
                _ => "unexpected character".to_string(),
            }
        } else {
            "unexpected character".to_string()
        };
        MalformedSpecifier {
            token: token.to_string(),
            substituted: substituted.clone(),
            offset,
            message,
        }
    })
}

/// Parser for a full specifier. The caller enforces end-of-input.
fn specifier(input: &mut &str) -> ModalResult<Directive> {
    alt((substring, range, plain)).parse_next(input)
}

/// Parser for substring directives: `<field>.<start>` or `<field>.<start>.<length>`.
fn substring(input: &mut &str) -> ModalResult<Directive> {
    let index = uint.parse_next(input)?;
    '.'.parse_next(input)?;
    let start = cut_err(uint)
        .context(StrContext::Expected(StrContextValue::Description(
            "<start>",
        )))
        .parse_next(input)?;
    let length = opt(preceded(
        '.',
        cut_err(uint).context(StrContext::Expected(StrContextValue::Description(
            "<length>",
        ))),
    ))
    .parse_next(input)?;

    Ok(match length {
        Some(length) => Directive::SubstringSliceField {
            index,
            start,
            length,
        },
        None => Directive::SubstringFromField { index, start },
    })
}

/// Parser for range directives: `<from>/<to>`.
fn range(input: &mut &str) -> ModalResult<Directive> {
    let from = uint.parse_next(input)?;
    '/'.parse_next(input)?;
    let to = cut_err(uint)
        .context(StrContext::Expected(StrContextValue::Description("<to>")))
        .parse_next(input)?;
    Ok(Directive::FieldRange { from, to })
}

/// Parser for plain directives: `0` is the whole line, anything else a field.
fn plain(input: &mut &str) -> ModalResult<Directive> {
    uint.map(|n| {
        if n == 0 {
            Directive::WholeLine
        } else {
            Directive::WholeField(n)
        }
    })
    .parse_next(input)
}

/// Parser for an unsigned integer.
fn uint(input: &mut &str) -> ModalResult<usize> {
    digit1.try_map(str::parse).parse_next(input)
}
