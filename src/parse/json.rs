//! JSON source parser
//!
//! Accepts an array of objects, or a single object treated as a one-element
//! array. Object keys are free-form and go through the alias table; malformed
//! content is a fatal error for the run.

use crate::{Error, Record, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON file and normalize its entries into records
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match value {
        Value::Object(_) => vec![value],
        Value::Array(items) => items,
        _ => {
            return Err(Error::JsonShape {
                path: path.to_path_buf(),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(Error::JsonEntry {
                path: path.to_path_buf(),
                index,
            });
        };
        records.push(Record::from_pairs(
            map.into_iter().map(|(k, v)| (k, value_to_string(&v))),
        ));
    }
    Ok(records)
}

/// Render a JSON value as the record's string form; null becomes empty
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
