//! Page Trace
//!
//! Converts plain-text paging simulation logs into a JSON array of
//! timestamped `request` and `page_fault` events.
//!
//! This crate provides the core implementation for the
//! `page-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! page-trace                         # a.txt -> log.json
//! page-trace convert -i sim.txt -o events.json
//! ```
//!
//! Library users can call the converter directly:
//!
//! ```
//! let events = page_trace::parser::convert(["(1, 0, 1)", "Page Fault: (0, 1)"]);
//! assert_eq!(events.len(), 2);
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
