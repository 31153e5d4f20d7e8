//! Line parser for paging simulation logs.
//!
//! Recognises two line shapes, anchored at the start of the trimmed line:
//! - `(time, process, page)` - a page request
//! - `Page Fault: (process, page)` - a fault raised by the last request
//!
//! Everything else is skipped. Trailing text after a match is ignored.

use super::schema::Event;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! line_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// `\d` is any Unicode decimal digit (Nd), not only ASCII.
line_pattern!(RE_REQUEST, r"^\((\d+),\s*(\d+),\s*(\d+)\)");
line_pattern!(RE_PAGE_FAULT, r"^Page Fault:\s*\((\d+),\s*(\d+)\)");
line_pattern!(RE_DECIMAL_DIGIT, r"^\d$");

fn captures<'a>(pattern: &LazyLock<Option<Regex>>, line: &'a str) -> Option<regex::Captures<'a>> {
    pattern.as_ref().and_then(|re| re.captures(line))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    RE_DECIMAL_DIGIT
        .as_ref()
        .is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Value of a Unicode decimal digit
///
/// Nd digits come in contiguous runs of ten starting at zero, so the value is
/// the offset from the start of the surrounding run, modulo ten.
fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(u64::from(d));
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some(u64::from((u32::from(c) - start) % 10))
}

/// Parse a run of decimal digits, `None` on overflow
fn parse_number(digits: &str) -> Option<u64> {
    digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

/// Split file contents into lines on `\n`, `\r\n` or a lone `\r`
///
/// **Public** - a trailing terminator does not produce an extra empty line
pub fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = contents;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Classification of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRecord {
    Request { time: u64, process: u64, page: u64 },
    PageFault { process: u64, page: u64 },
    Ignored,
}

/// Result of scanning a whole log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    /// Events in the order their lines appeared
    pub events: Vec<Event>,

    /// 1-based numbers of non-blank lines that matched neither shape
    pub unmatched_lines: Vec<usize>,
}

impl ParsedLog {
    pub fn request_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_request()).count()
    }

    pub fn page_fault_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_page_fault()).count()
    }
}

/// Classify one line of the simulation log
///
/// **Public** - pure, no state is carried between calls
///
/// Leading and trailing whitespace is stripped before matching. A line whose
/// numbers do not fit in a `u64` is `Ignored`, unlike a converter with
/// unbounded integers, which would still emit it.
pub fn classify_line(line: &str) -> LineRecord {
    let line = line.trim();

    if let Some(caps) = captures(&RE_REQUEST, line) {
        return match (
            parse_number(&caps[1]),
            parse_number(&caps[2]),
            parse_number(&caps[3]),
        ) {
            (Some(time), Some(process), Some(page)) => LineRecord::Request {
                time,
                process,
                page,
            },
            _ => LineRecord::Ignored,
        };
    }

    if let Some(caps) = captures(&RE_PAGE_FAULT, line) {
        return match (parse_number(&caps[1]), parse_number(&caps[2])) {
            (Some(process), Some(page)) => LineRecord::PageFault { process, page },
            _ => LineRecord::Ignored,
        };
    }

    LineRecord::Ignored
}

/// Scan a simulation log into events
///
/// **Public** - main entry point for parsing
///
/// The time of the last request seen is the only state carried from one line
/// to the next. Faults read it; unmatched lines leave it alone.
pub fn parse_log<I, S>(lines: I) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedLog::default();
    let mut last_request: Option<u64> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        match classify_line(line) {
            LineRecord::Request {
                time,
                process,
                page,
            } => {
                last_request = Some(time);
                parsed.events.push(Event::request(time, process, page));
            }
            LineRecord::PageFault { process, page } => {
                parsed
                    .events
                    .push(Event::page_fault(last_request, process, page));
            }
            LineRecord::Ignored => {
                if !line.trim().is_empty() {
                    parsed.unmatched_lines.push(index + 1);
                }
            }
        }
    }

    debug!(
        "Parsed {} events ({} unmatched lines)",
        parsed.events.len(),
        parsed.unmatched_lines.len()
    );

    parsed
}

/// Convert simulation log lines into events
///
/// **Public** - convenience wrapper around [`parse_log`]
pub fn convert<I, S>(lines: I) -> Vec<Event>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_log(lines).events
}
