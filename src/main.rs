// src/main.rs
mod config;
mod extractors;
mod fasta;
mod storage;
mod utils;

use clap::Parser;
use config::prompt::Prompter;
use config::{RawConfig, Setup};
use extractors::FastaExtractor;
use std::path::PathBuf;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the CSV to FASTA converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file with SEQ_ID, SHORT_NAME and PROTEIN_SEQUENCE columns (prompted if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output FASTA file, created or truncated (prompted if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// `all`, or a comma-separated list of SEQ_IDs to extract (prompted if omitted)
    #[arg(short, long)]
    select: Option<String>,

    /// Write a JSON summary of the run to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Fail instead of prompting for missing values
    #[arg(long)]
    no_prompt: bool,
}

impl From<Args> for RawConfig {
    fn from(args: Args) -> Self {
        RawConfig {
            input: args.input,
            output: args.output,
            select: args.select,
            report: args.report,
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);
    let no_prompt = args.no_prompt;
    let raw = RawConfig::from(args);

    // 3. Resolve the run configuration, asking for anything missing
    let setup = if no_prompt {
        raw.resolve(None::<&mut Prompter<std::io::Empty, std::io::Sink>>)?
    } else {
        raw.resolve(Some(&mut Prompter::stdio()))?
    };

    let config = match setup {
        Setup::Ready(config) => config,
        Setup::Cancelled => {
            tracing::warn!(
                "Operation cancelled: no valid SEQ_IDs were entered, and 'all' was not specified."
            );
            return Ok(());
        }
    };

    // 4. Run the extraction
    let extractor = FastaExtractor::new();
    let summary = extractor.extract_file(&config)?;

    println!("{}", "-".repeat(40));
    println!(
        "Process complete. Extracted {} sequence(s) to '{}'",
        summary.entries_written,
        config.output.display()
    );
    println!("{}", "-".repeat(40));

    // 5. Save the run report if requested
    if let Some(report_path) = &config.report {
        match StorageManager::new(&config).save_run_report(report_path, &summary) {
            Ok(path) => tracing::debug!("Run report available at {}", path.display()),
            Err(e) => tracing::error!("Failed to save run report: {}", e),
        }
    }

    Ok(())
}
