//! Plaintext notes parser
//!
//! Notes files describe one paper per paragraph, one `Key: Value` pair per
//! line. Paragraphs are separated by one or more blank lines.

use crate::{Record, Result};
use std::fs;
use std::path::Path;

/// Read a notes file and parse it into records
pub fn read_notes(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_notes_blocks(&text))
}

/// Split text into blank-line-separated blocks, one record per block
///
/// Within a block, each line containing a colon yields a pair split at the
/// first colon, both sides trimmed. Lines without a colon are ignored, and
/// blocks yielding no pairs are discarded.
pub fn parse_notes_blocks(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut pairs: Vec<(String, String)> = Vec::new();

    for line in text.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if !pairs.is_empty() {
                records.push(Record::from_pairs(pairs.drain(..)));
            }
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            pairs.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    records
}
