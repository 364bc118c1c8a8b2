//! Delimited-text (CSV) encoder.

use crate::table::{file_name, row_values, COLUMNS};
use crate::{ExportArtifact, ExportError};
use dl_core::record::PersonRecord;

/// Encodes the record as UTF-8 CSV: the fixed header row plus one data row.
pub fn encode(record: &PersonRecord) -> Result<ExportArtifact, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .and_then(|_| writer.write_record(row_values(record)))
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    Ok(ExportArtifact {
        file_name: file_name(record.document_number, "csv"),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> PersonRecord {
        PersonRecord {
            document_number: 12345678,
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            email: "ana@x.com".to_string(),
            phone: 5550001,
        }
    }

    #[test]
    fn emits_exactly_header_and_one_data_row() {
        let artifact = encode(&ana()).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Nombre,Apellido,Documento,Email,Teléfono");
        assert_eq!(lines[1], "Ana,Ruiz,12345678,ana@x.com,5550001");
    }

    #[test]
    fn quotes_fields_containing_the_delimiter() {
        let mut record = ana();
        record.last_name = "Ruiz, de la Torre".to_string();

        let artifact = encode(&record).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.lines().nth(1).unwrap().contains("\"Ruiz, de la Torre\""));
    }

    #[test]
    fn file_name_uses_the_csv_extension() {
        assert_eq!(encode(&ana()).unwrap().file_name, "Usuario_12345678.csv");
    }
}
