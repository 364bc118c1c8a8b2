//! The single-row table projection shared by the tabular encoders.

use dl_core::record::PersonRecord;

/// Column headers, in the fixed export order.
pub const COLUMNS: [&str; 5] = ["Nombre", "Apellido", "Documento", "Email", "Teléfono"];

/// Entity name used for the sheet and the file-name prefix.
pub const ENTITY_NAME: &str = "Usuario";

/// Builds the deterministic artifact file name for a record.
pub fn file_name(document_number: i64, extension: &str) -> String {
    format!("{}_{}.{}", ENTITY_NAME, document_number, extension)
}

/// Projects a record onto the fixed column order.
pub fn row_values(record: &PersonRecord) -> [String; 5] {
    [
        record.first_name.clone(),
        record.last_name.clone(),
        record.document_number.to_string(),
        record.email.clone(),
        record.phone.to_string(),
    ]
}
