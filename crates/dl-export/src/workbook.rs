//! Spreadsheet workbook encoder.

use crate::table::{file_name, row_values, COLUMNS, ENTITY_NAME};
use crate::{ExportArtifact, ExportError};
use dl_core::record::PersonRecord;
use rust_xlsxwriter::Workbook;

/// Encodes the record as a one-sheet workbook: one header row, one data row.
///
/// The numeric fields (Documento, Teléfono) are written as numbers so the
/// resulting cells sort and filter correctly.
pub fn encode(record: &PersonRecord) -> Result<ExportArtifact, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(ENTITY_NAME)
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
    }

    sheet
        .write_string(1, 0, record.first_name.as_str())
        .and_then(|s| s.write_string(1, 1, record.last_name.as_str()))
        .and_then(|s| s.write_number(1, 2, record.document_number as f64))
        .and_then(|s| s.write_string(1, 3, record.email.as_str()))
        .and_then(|s| s.write_number(1, 4, record.phone as f64))
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    Ok(ExportArtifact {
        file_name: file_name(record.document_number, "xlsx"),
        bytes,
    })
}
