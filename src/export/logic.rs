// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::core::source::STDIN_INPUT;
use crate::export::fs_utils::{ensure_unattended_writable, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{AttendanceExport, EventExport, ExportRecord};
use crate::export::xlsx::export_xlsx;
use crate::models::{ClockEvent, DailyAttendance};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export entry points used by the CLI commands.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the daily attendance report.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path (`~/` is expanded)
    /// - `force`: overwrite an existing file without asking
    pub fn export_attendance(
        rows: &[DailyAttendance],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let records: Vec<AttendanceExport> = rows.iter().map(AttendanceExport::from).collect();

        if records.is_empty() {
            warning("No attendance rows for the selected input/range.");
        }

        Self::export_records(&records, format, file, force, "Attendance")
    }

    /// Write the parsed clock events (intermediate sheet).
    pub fn export_events(
        events: &[ClockEvent],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let records: Vec<EventExport> = events.iter().map(EventExport::from).collect();

        if records.is_empty() {
            warning("No clock events parsed from input.");
        }

        Self::export_records(&records, format, file, force, "Clock Events")
    }

    /// Reject an existing `file` before a stdin `input` is consumed.
    ///
    /// Call ahead of reading the log: once stdin is drained the overwrite
    /// prompt could only ever read an empty answer.
    pub fn check_target(input: &str, file: &str, force: bool) -> AppResult<()> {
        if input == STDIN_INPUT {
            ensure_unattended_writable(&expand_tilde(file), force)?;
        }
        Ok(())
    }

    fn export_records<R: ExportRecord>(
        records: &[R],
        format: ExportFormat,
        file: &str,
        force: bool,
        sheet_name: &str,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(records, &path)?,
            ExportFormat::Json => export_json(records, &path)?,
            ExportFormat::Xlsx => export_xlsx(records, &path, sheet_name)?,
        }

        Ok(path)
    }
}
