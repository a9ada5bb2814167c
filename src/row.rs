//! The output row: one resolved token per specifier, in specifier order.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An ordered sequence of resolved tokens for one input line.
///
/// Displays as the tokens joined by single spaces, with no leading or
/// trailing space. Serializes as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    tokens: Vec<String>,
}

impl Row {
    /// Create an empty row with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a resolved token.
    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the row has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<String>> for Row {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.tokens.len()))?;
        for token in &self.tokens {
            seq.serialize_element(token)?;
        }
        seq.end()
    }
}
