//! doclook CLI
//!
//! Command-line shell for the doclook person-record lookup and export
//! workflow.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dl_client::{ClientConfig, LookupClient};
use dl_export::ExportFormat;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{run_categories, run_search, OutputFormat, SearchArgs};
use logging::LoggingConfig;

#[derive(Parser)]
#[command(name = "doclook")]
#[command(version)]
#[command(about = "Look up a person record by document number and export it", long_about = None)]
struct Cli {
    /// Base URL of the record service
    #[arg(long, default_value = dl_client::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the document categories known to the service
    Categories,

    /// Search for a person by document number
    Search {
        /// Document number to look up
        document_number: String,

        /// Document category id
        #[arg(short, long)]
        category: Option<i64>,

        /// Artifact format(s) to write on success (xlsx, csv, txt); repeatable
        #[arg(long = "export", value_name = "FORMAT")]
        exports: Vec<ExportFormat>,

        /// Directory export artifacts are written into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    logging::init_logging(&logging);

    let client = LookupClient::new(ClientConfig::new(cli.base_url.as_str()))?;

    let code = match cli.command {
        Commands::Categories => run_categories(&client, cli.format).await?,
        Commands::Search {
            document_number,
            category,
            exports,
            out,
        } => {
            let args = SearchArgs {
                category,
                document_number,
                exports,
                out_dir: out,
            };
            run_search(&client, &args, cli.format).await?
        }
    };

    std::process::exit(code);
}
