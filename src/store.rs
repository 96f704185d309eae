//! CSV-backed tabular store
//!
//! The CSV file is the accumulator across runs: loaded whole at startup and
//! fully rewritten at the end. A missing file is an empty dataset, and rows
//! from older files with fewer columns load with empty strings in the gaps.

use crate::{Field, Record, Result};
use std::path::Path;

/// Load the full record sequence from the store
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Rewrite the store with the given record sequence
///
/// Always a full overwrite: header row of the ten canonical names followed by
/// one row per record.
pub fn save(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        // serialize() only emits the header alongside a first row
        writer.write_record(Field::ALL.into_iter().map(Field::name))?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
