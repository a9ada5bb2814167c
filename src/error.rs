//! Error types for the field extractor.

use std::fmt;
use std::io;

/// Why a directive failed to resolve against a line's words.
///
/// Carries no line number; the driver attaches one when it aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A field index was outside `1..=word_count`.
    FieldOutOfRange { index: usize, word_count: usize },
    /// A range endpoint was outside `1..=word_count`.
    RangeOutOfRange {
        lo: usize,
        hi: usize,
        word_count: usize,
    },
    /// A directive resolved to empty text.
    EmptyResolution,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::FieldOutOfRange { index, word_count } => {
                write!(f, "field {} out of range for {}-word line", index, word_count)
            }
            IndexError::RangeOutOfRange { lo, hi, word_count } => {
                write!(f, "range {}/{} out of range for {}-word line", lo, hi, word_count)
            }
            IndexError::EmptyResolution => write!(f, "specifier resolved to empty text"),
        }
    }
}

/// A specifier token that does not classify as any directive shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSpecifier {
    /// The raw token as supplied on the command line.
    pub token: String,
    /// The token after `NF` substitution, as seen by the parser.
    pub substituted: String,
    /// Byte offset into `substituted` where parsing failed.
    pub offset: usize,
    /// What the parser expected at `offset`.
    pub message: String,
}

impl fmt::Display for MalformedSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed specifier {:?}: {}\n  {}\n  {}^",
            self.token,
            self.message,
            self.substituted,
            " ".repeat(self.offset)
        )
    }
}

/// A failure that terminates the run.
#[derive(Debug)]
pub enum Error {
    /// No specifiers were supplied; no input is read.
    Usage,
    /// A specifier failed to classify, first surfaced on `line`.
    Malformed {
        inner: MalformedSpecifier,
        line: usize,
    },
    /// A directive failed to resolve on `line`.
    Index { reason: IndexError, line: usize },
    /// The output stream could not be written.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "usage: gef <specifier>... (at least one field specifier)"),
            Error::Malformed { inner, line } => {
                write!(f, "{} (at input line {})", inner, line)
            }
            Error::Index { line, .. } => write!(f, "IndexError: {}", line),
            Error::Io(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Io(e.into())
    }
}

/// Result type for driver and resolver operations.
pub type Result<T> = std::result::Result<T, Error>;
