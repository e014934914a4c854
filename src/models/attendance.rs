use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

/// Display format for dates in every report column.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Display format for clock times (seconds are truncated).
pub const TIME_FORMAT: &str = "%H:%M";

/// Grouping unit: one employee identity on one calendar day.
///
/// The name is part of the key, so the same id with two spellings of the
/// name yields two distinct employee-days.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeDay {
    pub employee_id: String,
    pub name: String,
    pub date: NaiveDate,
}

/// Time and terminal of the event chosen for one side of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Punch {
    pub time: NaiveTime,
    pub terminal: String,
}

impl Punch {
    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// First clock-in / last clock-out summary of one employee-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAttendance {
    pub employee_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub clock_in: Option<Punch>,
    pub clock_out: Option<Punch>,
}

impl DailyAttendance {
    pub fn new(key: EmployeeDay, clock_in: Option<Punch>, clock_out: Option<Punch>) -> Self {
        Self {
            employee_id: key.employee_id,
            name: key.name,
            date: key.date,
            clock_in,
            clock_out,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn clock_in_time(&self) -> Option<String> {
        self.clock_in.as_ref().map(Punch::time_str)
    }

    pub fn terminal_in(&self) -> Option<&str> {
        self.clock_in.as_ref().map(|p| p.terminal.as_str())
    }

    pub fn clock_out_time(&self) -> Option<String> {
        self.clock_out.as_ref().map(Punch::time_str)
    }

    pub fn terminal_out(&self) -> Option<&str> {
        self.clock_out.as_ref().map(|p| p.terminal.as_str())
    }

    pub fn weekday(&self) -> &'static str {
        weekday_name(self.date.weekday())
    }
}

/// English weekday name, independent of the system locale.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
