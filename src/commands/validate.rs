use crate::output::read_events;
use crate::parser::EventKind;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an event log JSON file and print its totals
pub fn validate_event_log(file_path: &Path) -> Result<()> {
    println!("Validating event log: {}", file_path.display());

    let events = read_events(file_path)
        .with_context(|| format!("Not a valid event log: {}", file_path.display()))?;

    let requests = events.iter().filter(|e| e.event == EventKind::Request).count();
    let page_faults = events.len() - requests;

    println!("✓ Valid event log JSON");
    println!("  Events: {}", events.len());
    println!("  Requests: {}", requests);
    println!("  Page Faults: {}", page_faults);

    if let (Some(first), Some(last)) = (events.first(), events.last()) {
        println!("  Time Span: {} .. {}", first.time, last.time);
    }

    Ok(())
}
