//! Line driver: sequences directives over each input line.
//!
//! Output is interleaved with processing: each successful line is written
//! before the next line is touched, and lines already written stay visible
//! when a later line aborts the run.

use std::io::Write;

use crate::error::{Error, IndexError, Result};
use crate::parser;
use crate::resolve;
use crate::row::Row;

/// How resolved rows are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fields joined by single spaces, one line per input line.
    Plain,
    /// One JSON array of field strings per input line.
    Json,
}

/// Run every specifier over every line, writing one output line per input line.
///
/// Specifiers are applied in invocation order; their order defines output
/// column order. The first failure halts the run with the 1-based line number
/// attached; no further lines are processed.
pub fn process<W: Write>(
    lines: &[String],
    specifiers: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if specifiers.is_empty() {
        return Err(Error::Usage);
    }

    for (number, line) in lines.iter().enumerate() {
        let number = number + 1;
        let words: Vec<&str> = line.split_whitespace().collect();

        let mut row = Row::with_capacity(specifiers.len());
        for token in specifiers {
            let directive = parser::normalize(token, words.len())
                .map_err(|inner| Error::Malformed {
                    inner,
                    line: number,
                })?;
            let resolved = resolve::resolve(&directive, &words).map_err(|reason| Error::Index {
                reason,
                line: number,
            })?;
            if resolved.is_empty() {
                return Err(Error::Index {
                    reason: IndexError::EmptyResolution,
                    line: number,
                });
            }
            row.push(resolved);
        }

        match format {
            OutputFormat::Plain => writeln!(out, "{}", row)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &row)?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}
