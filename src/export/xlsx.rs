//! Excel workbook writer

use crate::{Field, Record};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// Write the record sequence as a single-sheet workbook
///
/// Row 0 holds the canonical field names, then one row per record. Errors are
/// returned to the caller, which treats them as non-fatal.
pub fn write_xlsx(path: impl AsRef<Path>, records: &[Record]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, field) in Field::ALL.into_iter().enumerate() {
        sheet.write_string(0, col as u16, field.name())?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, field) in Field::ALL.into_iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, record.get(field))?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
