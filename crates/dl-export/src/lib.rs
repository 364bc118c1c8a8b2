//! # dl-export
//!
//! Pure encoders that turn one held [`PersonRecord`] into a downloadable
//! artifact: an xlsx workbook, a UTF-8 CSV, or a plain-text summary. None of
//! them touch the network or the lookup client; writing the bytes anywhere
//! is the caller's concern.
//!
//! The workflow-facing entry point is [`export`], which enforces the
//! held-record precondition: with no record held it emits nothing.

pub mod delimited;
pub mod table;
pub mod text;
pub mod workbook;

use dl_core::record::PersonRecord;
use thiserror::Error;
use tracing::warn;

/// Errors internal to artifact encoding.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("workbook encoding failed: {0}")]
    Workbook(String),

    #[error("csv encoding failed: {0}")]
    Csv(String),
}

/// The three artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Spreadsheet workbook (`.xlsx`).
    Workbook,
    /// Comma-separated text (`.csv`).
    Csv,
    /// Human-readable summary (`.txt`).
    Text,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Workbook => "xlsx",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            "txt" => Ok(Self::Text),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// A named, downloadable byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Deterministic file name, `Usuario_{documentNumber}.{ext}`.
    pub file_name: String,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

/// Encodes the held record, if any, into the requested format.
///
/// Returns `None` when no record is held: the guard is a required
/// precondition of every export operation, and no file may be emitted
/// without a record. Encoder-internal failures are also absorbed to `None`
/// with a log, matching the workflow's low-severity-error policy.
pub fn export(held: Option<&PersonRecord>, format: ExportFormat) -> Option<ExportArtifact> {
    let record = held?;

    let encoded = match format {
        ExportFormat::Workbook => workbook::encode(record),
        ExportFormat::Csv => delimited::encode(record),
        ExportFormat::Text => Ok(text::encode(record)),
    };

    match encoded {
        Ok(artifact) => Some(artifact),
        Err(err) => {
            warn!(error = %err, format = ?format, "export encoding failed");
            None
        }
    }
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
    fn export_without_held_record_emits_nothing() {
        for format in [ExportFormat::Workbook, ExportFormat::Csv, ExportFormat::Text] {
            assert!(export(None, format).is_none());
        }
    }

    #[test]
    fn export_names_follow_the_fixed_scheme() {
        let record = ana();
        for format in [ExportFormat::Workbook, ExportFormat::Csv, ExportFormat::Text] {
            let artifact = export(Some(&record), format).unwrap();
            assert_eq!(
                artifact.file_name,
                format!("Usuario_12345678.{}", format.extension())
            );
            assert!(!artifact.bytes.is_empty());
        }
    }

    #[test]
    fn format_parses_from_extension_strings() {
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Workbook));
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("txt".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
