//! Configuration and constants for the CLI.

/// Simulation log read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "a.txt";

/// Event log written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "log.json";

// Faults are placed half a tick after the request that triggered them so they
// sort between integer-timed requests.
pub const FAULT_TIME_OFFSET: f64 = 0.5;
