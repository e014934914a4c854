// src/export/model.rs

use crate::models::{ClockEvent, DailyAttendance};
use serde::Serialize;

/// How a column is written to spreadsheets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Date,     // DD-MM-YYYY
    Time,     // HH:MM
    DateTime, // DD-MM-YYYY HH:MM:SS
}

/// A flat row accepted by every tabular sink.
pub trait ExportRecord: Serialize {
    /// Column headers, in output order (must match the serde renames).
    const HEADERS: &'static [&'static str];
    /// Spreadsheet cell kind per column.
    const KINDS: &'static [CellKind];

    /// Cell values in header order; absent values are empty strings.
    fn to_row(&self) -> Vec<String>;
}

/// One daily attendance row, as written to CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Clock In Time")]
    pub clock_in_time: Option<String>,
    #[serde(rename = "Terminal In")]
    pub terminal_in: Option<String>,
    #[serde(rename = "Clock Out Time")]
    pub clock_out_time: Option<String>,
    #[serde(rename = "Terminal Out")]
    pub terminal_out: Option<String>,
    #[serde(rename = "Weekday")]
    pub weekday: String,
}

impl From<&DailyAttendance> for AttendanceExport {
    fn from(r: &DailyAttendance) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            name: r.name.clone(),
            date: r.date_str(),
            clock_in_time: r.clock_in_time(),
            terminal_in: r.terminal_in().map(str::to_string),
            clock_out_time: r.clock_out_time(),
            terminal_out: r.terminal_out().map(str::to_string),
            weekday: r.weekday().to_string(),
        }
    }
}

impl ExportRecord for AttendanceExport {
    const HEADERS: &'static [&'static str] = &[
        "Employee ID",
        "Name",
        "Date",
        "Clock In Time",
        "Terminal In",
        "Clock Out Time",
        "Terminal Out",
        "Weekday",
    ];

    const KINDS: &'static [CellKind] = &[
        CellKind::Text,
        CellKind::Text,
        CellKind::Date,
        CellKind::Time,
        CellKind::Text,
        CellKind::Time,
        CellKind::Text,
        CellKind::Text,
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.name.clone(),
            self.date.clone(),
            self.clock_in_time.clone().unwrap_or_default(),
            self.terminal_in.clone().unwrap_or_default(),
            self.clock_out_time.clone().unwrap_or_default(),
            self.terminal_out.clone().unwrap_or_default(),
            self.weekday.clone(),
        ]
    }
}

/// One parsed clock event (intermediate "converted" sheet).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Clocking Time")]
    pub clocking_time: String,
    #[serde(rename = "Terminal Description")]
    pub terminal: String,
}

impl From<&ClockEvent> for EventExport {
    fn from(ev: &ClockEvent) -> Self {
        Self {
            employee_id: ev.employee_id.clone(),
            name: ev.name.clone(),
            clocking_time: ev.clocking_str(),
            terminal: ev.terminal.clone(),
        }
    }
}

impl ExportRecord for EventExport {
    const HEADERS: &'static [&'static str] =
        &["Employee ID", "Name", "Clocking Time", "Terminal Description"];

    const KINDS: &'static [CellKind] = &[
        CellKind::Text,
        CellKind::Text,
        CellKind::DateTime,
        CellKind::Text,
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.name.clone(),
            self.clocking_time.clone(),
            self.terminal.clone(),
        ]
    }
}

pub(crate) fn records_to_table<R: ExportRecord>(records: &[R]) -> Vec<Vec<String>> {
    records.iter().map(ExportRecord::to_row).collect()
}
