//! Markdown table renderer

use crate::{Field, Record};

/// Render the record sequence as a pipe table
///
/// Header row of human-readable labels, a separator row, then one row per
/// record with fields in canonical order. Empty fields render as empty cells.
pub fn to_markdown(records: &[Record]) -> String {
    let mut md = String::new();

    md.push('|');
    for field in Field::ALL {
        md.push_str(&format!(" {} |", field.label()));
    }
    md.push('\n');

    md.push('|');
    for _ in Field::ALL {
        md.push_str("---|");
    }
    md.push('\n');

    for record in records {
        md.push('|');
        for field in Field::ALL {
            md.push_str(&format!(" {} |", record.get(field)));
        }
        md.push('\n');
    }

    md
}
