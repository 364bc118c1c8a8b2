//! `doclook categories`: lists the document categories.

use super::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use dl_client::RecordLookup;

/// Lists the categories known to the record service.
///
/// Never fails: a fetch failure surfaces as an empty list, per the lookup
/// contract.
pub async fn run_categories(lookup: &dyn RecordLookup, format: OutputFormat) -> Result<i32> {
    let categories = lookup.fetch_document_categories().await;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("{}", "No hay tipos de documento disponibles".yellow());
            } else {
                println!("{}", "Tipos de documento:".bold());
                for category in &categories {
                    println!("  {:>4}  {}", category.id, category.name);
                }
            }
        }
    }

    Ok(0)
}
