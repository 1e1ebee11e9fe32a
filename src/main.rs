// Entry point for umu-search.
// Wires the CLI onto the cache-aware loader, row filter, and presenter.

mod cache;
mod cli;
mod database;
mod error;
mod output;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cache::FileCache;
use cli::Cli;
use database::{DatabaseClient, SEARCH_FIELDS, normalize_field};
use error::{Result, SearchError};

/// Cache file name, one per working directory.
const CACHE_FILE: &str = "umu-database.csv";

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();

    if cli.is_empty() {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                SearchError::InvalidPrintField { .. } => eprintln!("{err}"),
                _ => eprintln!("An error occurred: {err}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Selector validation happens before any network access.
    let print_field = cli
        .print
        .as_deref()
        .map(|input| {
            normalize_field(input, &SEARCH_FIELDS).ok_or_else(|| SearchError::InvalidPrintField {
                input: input.to_string(),
                valid: SEARCH_FIELDS.join(", "),
            })
        })
        .transpose()?;

    let client = DatabaseClient::new()?;
    let cache = FileCache::new(CACHE_FILE);
    let text = database::load(&client, &cache).await?;

    let records = database::filter(&text, &cli.criteria())?;
    tracing::debug!(matches = records.len(), "search complete");

    let mut stdout = io::stdout().lock();
    output::present(&mut stdout, &records, print_field)?;
    Ok(())
}
