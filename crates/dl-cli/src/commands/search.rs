//! `doclook search`: runs the full search-and-export workflow.

use super::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use dl_client::RecordLookup;
use dl_core::workflow::{SearchSession, SearchState, MSG_INCOMPLETE_FORM};
use dl_core::WorkflowError;
use dl_export::{export, ExportFormat};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Arguments for the search command.
pub struct SearchArgs {
    /// Selected document category id, if any.
    pub category: Option<i64>,
    /// Raw document-number field.
    pub document_number: String,
    /// Artifact formats to emit on a successful search.
    pub exports: Vec<ExportFormat>,
    /// Directory the artifacts are written into.
    pub out_dir: PathBuf,
}

/// Runs one search through the session state machine and optionally writes
/// export artifacts for the held record.
///
/// Exit codes: 0 found, 1 not found, 2 validation or request failure.
pub async fn run_search(
    lookup: &dyn RecordLookup,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<i32> {
    let mut session = SearchSession::new();
    session.set_categories(lookup.fetch_document_categories().await);

    let query = match session.submit(args.category, &args.document_number) {
        Ok(query) => query,
        Err(WorkflowError::Validation(err)) => {
            debug!(error = %err, "search input rejected");
            report_message(format, "invalid", MSG_INCOMPLETE_FORM);
            return Ok(2);
        }
        Err(err) => return Err(err).context("search could not be submitted"),
    };

    match lookup.search_by_document_number(query.document_number).await {
        Ok(Some(record)) => session.finish_found(record)?,
        Ok(None) => session.finish_not_found()?,
        Err(err) => {
            warn!(error = %err, document_number = query.document_number, "lookup request failed");
            session.finish_failed()?;
        }
    }

    match session.state() {
        SearchState::Found => {
            let record = session.record().context("found state holds a record")?;
            let written = write_exports(&session, args)?;

            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "state": "found",
                            "record": record,
                            "exports": written,
                        }))?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{} {} {}",
                        "Encontrado:".green().bold(),
                        record.first_name,
                        record.last_name
                    );
                    println!("  Documento: {}", record.document_number);
                    println!("  Email:     {}", record.email);
                    println!("  Teléfono:  {}", record.phone);
                    for path in &written {
                        println!("  {} {}", "Exportado:".cyan(), path);
                    }
                }
            }
            Ok(0)
        }
        SearchState::NotFound => {
            report_message(format, "not_found", session.message().unwrap_or_default());
            Ok(1)
        }
        SearchState::Failed => {
            report_message(format, "failed", session.message().unwrap_or_default());
            Ok(2)
        }
        // submit() and the completion calls above leave no other state.
        other => anyhow::bail!("search ended in unexpected state {:?}", other),
    }
}

fn write_exports(session: &SearchSession, args: &SearchArgs) -> Result<Vec<String>> {
    let mut written = Vec::new();
    for format in &args.exports {
        let Some(artifact) = export(session.record(), *format) else {
            continue;
        };
        let path = args.out_dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path.display().to_string());
    }
    Ok(written)
}

fn report_message(format: OutputFormat, state: &str, message: &str) {
    match format {
        OutputFormat::Json => {
            println!("{}", json!({ "state": state, "message": message }));
        }
        OutputFormat::Text => {
            println!("{}", message.red());
        }
    }
}
