//! Simulation log parsing and event schema.
//!
//! This module handles:
//! - Classifying raw log lines
//! - Timestamping page faults against the last request
//! - Defining the output event schema

pub mod schema;
pub mod sim_log;

// Re-export main types
pub use schema::{Event, EventKind, EventTime};
pub use sim_log::{classify_line, convert, parse_log, split_lines, LineRecord, ParsedLog};
