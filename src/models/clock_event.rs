use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// Format of the clocking timestamp as written by the terminals (day first).
pub const CLOCKING_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One scan of an employee badge/fingerprint at a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockEvent {
    pub employee_id: String,      // first token of the line, no whitespace
    pub name: String,             // free text, may contain spaces
    pub timestamp: NaiveDateTime, // DD-MM-YYYY HH:MM:SS, no timezone
    pub terminal: String,         // remainder of the line
}

impl ClockEvent {
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        timestamp: NaiveDateTime,
        terminal: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            timestamp,
            terminal: terminal.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Timestamp rendered back in the terminal format.
    pub fn clocking_str(&self) -> String {
        self.timestamp.format(CLOCKING_FORMAT).to_string()
    }
}
