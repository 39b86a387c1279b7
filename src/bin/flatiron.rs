//! flatiron: flatten a frame-metadata JSON capture into a CSV table
//!
//! Usage:
//!   # Write next to the input (capture.csv)
//!   flatiron capture.json
//!
//!   # Explicit output path
//!   flatiron capture.json -o table.csv
//!
//!   # Documents keyed by something other than "frame"
//!   flatiron capture.json --key samples

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use flatiron::{document, flatten, schema, table, TableConfig};
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "flatiron")]
#[command(about = "Flatten a frame-metadata JSON capture into a CSV table", long_about = None)]
struct Args {
    /// Input JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output CSV file (defaults to the input path with a .csv extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Root key holding the record array (default: "frame")
    #[arg(long)]
    key: Option<String>,

    /// Separator between path segments in column names (default: "_")
    #[arg(long)]
    separator: Option<String>,

    /// Be extra verbose in printing of log messages
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    // Build config
    let mut config = TableConfig::default();
    if let Some(key) = args.key {
        config.records_key = key;
    }
    if let Some(separator) = args.separator {
        config.separator = separator;
    }

    // Both paths are validated before any processing begins
    document::check_input_path(&args.input)?;
    let output = document::resolve_output_path(&args.input, args.output)?;

    let capture = document::load_document(&args.input)?;
    let records = document::select_records(capture, &config.records_key)?;
    info!(records = records.len(), "flattening records");

    let flat = flatten::flatten_records(&records)?;
    let columns = schema::reconcile(&flat);
    debug!(columns = columns.len(), "reconciled column set");

    // The output file only exists once reading and selection have succeeded
    let file = File::create(&output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    table::write_table(file, &columns, &flat, &config)?;
    info!(path = %output.display(), "wrote table");

    Ok(())
}
