//! Page Trace CLI
//!
//! Converts a paging simulation log into a JSON array of
//! `request` and `page_fault` events.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use page_trace::commands::{execute_convert, validate_args, validate_event_log, ConvertArgs};
use page_trace::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Page Trace - paging simulation log to JSON converter
#[derive(Parser, Debug)]
#[command(name = "page-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to converting a.txt into log.json)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a simulation log into a JSON event log
    Convert {
        /// Simulation log to read
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// JSON event log to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Warn about non-blank lines that are neither requests nor faults
        #[arg(long)]
        warn_unmatched: bool,
    },

    /// Validate a JSON event log file
    Validate {
        /// Path to event log JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => {
            let args = ConvertArgs::default();
            validate_args(&args)?;
            execute_convert(&args)?;
        }

        Some(Commands::Convert {
            input,
            output,
            warn_unmatched,
        }) => {
            let args = ConvertArgs {
                input,
                output,
                warn_unmatched,
            };

            // Validate args first
            validate_args(&args)?;

            execute_convert(&args)?;
        }

        Some(Commands::Validate { file }) => {
            validate_event_log(&file)?;
        }
    }

    Ok(())
}
