//! Event schema written to the JSON event log.
//!
//! Field order of [`Event`] is the key order of every object in the output
//! array: `time`, `process`, `page`, `event`.

use crate::utils::config::FAULT_TIME_OFFSET;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single entry of the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Simulation time of the event
    pub time: EventTime,

    /// Process that issued the access
    pub process: u64,

    /// Page that was accessed
    pub page: u64,

    /// What happened
    pub event: EventKind,
}

impl Event {
    /// Request event at integer time `time`
    pub fn request(time: u64, process: u64, page: u64) -> Self {
        Self {
            time: EventTime::At(time),
            process,
            page,
            event: EventKind::Request,
        }
    }

    /// Page fault raised by the request seen at `last_request`
    ///
    /// A fault with no preceding request is timed at `0`.
    pub fn page_fault(last_request: Option<u64>, process: u64, page: u64) -> Self {
        let time = match last_request {
            Some(t) => EventTime::After(t),
            None => EventTime::At(0),
        };

        Self {
            time,
            process,
            page,
            event: EventKind::PageFault,
        }
    }

    pub fn is_request(&self) -> bool {
        self.event == EventKind::Request
    }

    pub fn is_page_fault(&self) -> bool {
        self.event == EventKind::PageFault
    }
}

/// Kind tag of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Request,
    PageFault,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Request => f.write_str("request"),
            EventKind::PageFault => f.write_str("page_fault"),
        }
    }
}

/// Event timestamp
///
/// Requests carry the integer time read from the log. Faults are placed
/// [`FAULT_TIME_OFFSET`] after the request that raised them, which keeps them
/// between two integer-timed requests without colliding with either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Number")]
pub enum EventTime {
    /// Exactly at this tick (serialized as an integer)
    At(u64),
    /// Half a tick after this one (serialized as `t + 0.5`)
    After(u64),
}

impl EventTime {
    /// Numeric value as written to the event log
    pub fn as_f64(&self) -> f64 {
        match *self {
            EventTime::At(t) => t as f64,
            EventTime::After(t) => t as f64 + FAULT_TIME_OFFSET,
        }
    }
}

impl Serialize for EventTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            EventTime::At(t) => serializer.serialize_u64(t),
            EventTime::After(_) => serializer.serialize_f64(self.as_f64()),
        }
    }
}

impl TryFrom<serde_json::Number> for EventTime {
    type Error = String;

    fn try_from(number: serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(t) = number.as_u64() {
            return Ok(EventTime::At(t));
        }

        let value = number
            .as_f64()
            .ok_or_else(|| format!("Invalid event time: {}", number))?;
        let base = value - FAULT_TIME_OFFSET;

        if base >= 0.0 && base.fract() == 0.0 {
            Ok(EventTime::After(base as u64))
        } else {
            Err(format!(
                "Event time must be a non-negative integer or integer + {}: {}",
                FAULT_TIME_OFFSET, number
            ))
        }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::At(t) => write!(f, "{}", t),
            EventTime::After(_) => write!(f, "{}", self.as_f64()),
        }
    }
}
