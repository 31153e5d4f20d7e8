//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the simulation log
//! 2. Parses it into events
//! 3. Writes the JSON event log

use crate::output::{read_sim_log, validate_path, write_events};
use crate::parser::{parse_log, split_lines};
use crate::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Simulation log to read
    pub input: PathBuf,

    /// JSON event log to write
    pub output: PathBuf,

    /// Log a warning for every non-blank line that is not an event
    pub warn_unmatched: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            warn_unmatched: false,
        }
    }
}

/// Outcome of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub events: usize,
    pub requests: usize,
    pub page_faults: usize,
    pub unmatched_lines: usize,
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// Prints `Converted <input> to <output> with <N> events.` on success.
///
/// # Errors
/// * Input file missing or unreadable
/// * Output file cannot be written
pub fn execute_convert(args: &ConvertArgs) -> Result<ConvertReport> {
    let start_time = Instant::now();

    info!("Converting {} -> {}", args.input.display(), args.output.display());

    let contents = read_sim_log(&args.input).context("Failed to read simulation log")?;

    let parsed = parse_log(split_lines(&contents));

    if args.warn_unmatched {
        for line_no in &parsed.unmatched_lines {
            warn!("{}:{}: line is neither a request nor a page fault", args.input.display(), line_no);
        }
    } else if !parsed.unmatched_lines.is_empty() {
        debug!("Skipped {} unmatched lines", parsed.unmatched_lines.len());
    }

    write_events(&parsed.events, &args.output).context("Failed to write event log")?;

    let report = ConvertReport {
        events: parsed.events.len(),
        requests: parsed.request_count(),
        page_faults: parsed.page_fault_count(),
        unmatched_lines: parsed.unmatched_lines.len(),
    };

    println!(
        "Converted {} to {} with {} events.",
        args.input.display(),
        args.output.display(),
        report.events
    );

    debug!(
        "{} requests, {} page faults",
        report.requests, report.page_faults
    );
    info!("Conversion completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Input and output must be different files");
    }

    validate_path(&args.output).context("Invalid output path")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let args = ConvertArgs::default();
        assert_eq!(args.input, PathBuf::from("a.txt"));
        assert_eq!(args.output, PathBuf::from("log.json"));
        assert!(!args.warn_unmatched);
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&ConvertArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ConvertArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = ConvertArgs {
            output: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_file() {
        let args = ConvertArgs {
            input: PathBuf::from("trace.txt"),
            output: PathBuf::from("trace.txt"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            output: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
