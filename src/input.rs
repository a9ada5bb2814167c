//! Input loading: whole-input buffering before processing.
//!
//! The entire input is read into memory and split into lines before any
//! directive runs; processing never overlaps with reading.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Read all lines from standard input.
pub fn from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    from_reader(stdin.lock()).context("reading stdin")
}

/// Read all lines from the given files, concatenated in argument order.
pub fn from_files(paths: &[impl AsRef<Path>]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            lines.push(line.with_context(|| format!("reading {}", path.display()))?);
        }
    }
    Ok(lines)
}

fn from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
