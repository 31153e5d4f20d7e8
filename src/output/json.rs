//! JSON event log writer and simulation log reader.
//!
//! Event logs are written as a single pretty-printed JSON array
//! (2-space indentation, no trailing newline).

use super::validate_path;
use crate::parser::schema::Event;
use crate::utils::error::{InputError, OutputError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a simulation log into memory
///
/// **Public** - the whole file is loaded before parsing begins
///
/// # Errors
/// * `InputError::ReadFailed` - file missing, unreadable or not UTF-8
pub fn read_sim_log(input_path: impl AsRef<Path>) -> Result<String, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading simulation log from: {}", input_path.display());

    let contents = std::fs::read_to_string(input_path).map_err(|source| InputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} bytes", contents.len());

    Ok(contents)
}

/// Write events to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `events` - Events in discovery order
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let events = convert(split_lines(&contents));
/// write_events(&events, "log.json")?;
/// ```
pub fn write_events(events: &[Event], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} events to: {}", events.len(), output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, events).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!(
        "Event log written ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Render events exactly as [`write_events`] would write them
///
/// **Public** - useful for tests and debugging
pub fn events_to_string(events: &[Event]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(events).map_err(OutputError::SerializationFailed)
}

/// Read an event log back from a JSON file
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `InputError::ReadFailed` - file missing or unreadable
/// * `InputError::InvalidEventLog` - Not a JSON array of events
pub fn read_events(input_path: impl AsRef<Path>) -> Result<Vec<Event>, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading event log from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| InputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    let events: Vec<Event> = serde_json::from_reader(BufReader::new(file))?;

    debug!("Event log loaded: {} events", events.len());

    Ok(events)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
