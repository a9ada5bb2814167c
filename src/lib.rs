//! Gef prints selected whitespace-delimited fields of each input line.
//!
//! A field specifier names one output column: a 1-based field index, `0` for
//! the whole line, `<field>.<start>[.<length>]` for a character slice of a
//! field, or `<from>/<to>` for an inclusive field range (reversed when
//! `from > to`). The `NF` alias stands for the number of fields in the
//! current line.

pub mod directive;
pub mod driver;
pub mod error;
pub mod input;
pub mod parser;
pub mod resolve;
pub mod row;
