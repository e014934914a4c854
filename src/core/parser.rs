//! Line grammar of the terminal export.
//!
//! ```text
//! <employee id> <name ...> <DD-MM-YYYY HH:MM:SS> <terminal description ...>
//! ```
//!
//! The name is matched non-greedily, so it ends right before the first
//! timestamp that follows a whitespace gap.

use crate::errors::{AppError, AppResult};
use crate::models::ClockEvent;
use crate::models::clock_event::CLOCKING_FORMAT;
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(.+?)\s+(\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2})\s+(.+)$")
        .expect("clock line regex is valid")
});

/// Parse one raw line into a [`ClockEvent`].
///
/// Returns `None` when the trimmed line does not match the grammar in full
/// or when the timestamp is not a real calendar date/time (e.g. `32-01-2024`
/// or second `60`).
pub fn parse_line(line: &str) -> Option<ClockEvent> {
    let caps = LINE_RE.captures(line.trim())?;

    // chrono reads second 60 as a leap second; the terminal never emits one
    let timestamp = NaiveDateTime::parse_from_str(&caps[3], CLOCKING_FORMAT)
        .ok()
        .filter(|ts| ts.nanosecond() < 1_000_000_000)?;

    Some(ClockEvent::new(
        &caps[1],
        caps[2].trim(),
        timestamp,
        caps[4].trim(),
    ))
}

/// A non-blank line that did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_no: usize, // 1-based
    pub content: String,
}

/// Outcome of parsing a whole line source.
#[derive(Debug, Default, Clone)]
pub struct ParseReport {
    pub events: Vec<ClockEvent>,
    pub skipped: Vec<SkippedLine>,
    pub blank: usize,
}

impl ParseReport {
    pub fn total_lines(&self) -> usize {
        self.events.len() + self.skipped.len() + self.blank
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Turn the first skipped line (if any) into an error.
    pub fn into_strict(self) -> AppResult<Vec<ClockEvent>> {
        match self.skipped.into_iter().next() {
            Some(s) => Err(AppError::MalformedLine {
                line_no: s.line_no,
                content: s.content,
            }),
            None => Ok(self.events),
        }
    }
}

/// Parse every line of a source, keeping events in input order.
///
/// Blank lines are counted but not reported as malformed.
pub fn parse_lines<I, S>(lines: I) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        if line.trim().is_empty() {
            report.blank += 1;
            continue;
        }

        match parse_line(line) {
            Some(ev) => report.events.push(ev),
            None => report.skipped.push(SkippedLine {
                line_no: idx + 1,
                content: line.trim().to_string(),
            }),
        }
    }

    report
}
