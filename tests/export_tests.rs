mod common;
use common::{ev, temp_path};
use rattendance::aggregate;
use rattendance::export::{AttendanceExport, ExportFormat, ExportLogic, ExportRecord};
use serde_json::Value;
use std::fs;

fn sample_rows() -> Vec<rattendance::DailyAttendance> {
    aggregate(&[
        ev("1001", "John Smith", "01-01-2024 07:00:00", "Main Gate"),
        ev("1001", "John Smith", "01-01-2024 18:30:00", "Back Exit"),
        ev("1002", "Ana Maria Lopez", "02-01-2024 09:30:00", "Lobby, North"),
        ev("1003", "Omar", "03-01-2024 16:05:59", "Warehouse"),
    ])
}

#[test]
fn test_attendance_export_columns() {
    let rows = sample_rows();
    let rec = AttendanceExport::from(&rows[1]);

    assert_eq!(
        AttendanceExport::HEADERS,
        &[
            "Employee ID",
            "Name",
            "Date",
            "Clock In Time",
            "Terminal In",
            "Clock Out Time",
            "Terminal Out",
            "Weekday"
        ]
    );
    assert_eq!(
        rec.to_row(),
        vec![
            "1002",
            "Ana Maria Lopez",
            "02-01-2024",
            "09:30",
            "Lobby, North",
            "",
            "",
            "Tuesday"
        ]
    );
}

#[test]
fn test_export_attendance_csv() {
    let out = temp_path("export_attendance_csv", "csv");

    ExportLogic::export_attendance(&sample_rows(), ExportFormat::Csv, &out, true)
        .expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Employee ID,Name,Date,Clock In Time,Terminal In,Clock Out Time,Terminal Out,Weekday"
    );
    assert_eq!(
        lines[1],
        "1001,John Smith,01-01-2024,07:00,Main Gate,18:30,Back Exit,Monday"
    );
    // terminal containing the delimiter is quoted, absent side is empty
    assert_eq!(
        lines[2],
        "1002,Ana Maria Lopez,02-01-2024,09:30,\"Lobby, North\",,,Tuesday"
    );
    assert_eq!(lines[3], "1003,Omar,03-01-2024,,,16:05,Warehouse,Wednesday");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_attendance_json_uses_null_for_absent() {
    let out = temp_path("export_attendance_json", "json");

    ExportLogic::export_attendance(&sample_rows(), ExportFormat::Json, &out, true)
        .expect("json export");

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array of rows");

    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["Employee ID"], "1001");
    assert_eq!(arr[0]["Clock Out Time"], "18:30");
    assert!(arr[1]["Clock Out Time"].is_null());
    assert!(arr[1]["Terminal Out"].is_null());
    assert!(arr[2]["Clock In Time"].is_null());
    assert_eq!(arr[2]["Weekday"], "Wednesday");
}

#[test]
fn test_export_attendance_xlsx_writes_a_workbook() {
    let out = temp_path("export_attendance_xlsx", "xlsx");

    ExportLogic::export_attendance(&sample_rows(), ExportFormat::Xlsx, &out, true)
        .expect("xlsx export");

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_report_still_writes_header() {
    let out = temp_path("export_empty_csv", "csv");

    ExportLogic::export_attendance(&[], ExportFormat::Csv, &out, true).expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content.trim_end(),
        "Employee ID,Name,Date,Clock In Time,Terminal In,Clock Out Time,Terminal Out,Weekday"
    );
}

#[test]
fn test_export_events_csv() {
    let out = temp_path("export_events_csv", "csv");
    let events = vec![
        ev("1001", "John Smith", "01-01-2024 07:00:00", "Main Gate"),
        ev("1002", "Ana", "02-01-2024 09:30:05", "Lobby"),
    ];

    ExportLogic::export_events(&events, ExportFormat::Csv, &out, true).expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Employee ID,Name,Clocking Time,Terminal Description");
    assert_eq!(lines[1], "1001,John Smith,01-01-2024 07:00:00,Main Gate");
    assert_eq!(lines[2], "1002,Ana,02-01-2024 09:30:05,Lobby");
}

#[test]
fn test_export_into_missing_directory_fails() {
    let mut dir = std::env::temp_dir();
    dir.push("rattendance_no_such_dir");
    fs::remove_dir_all(&dir).ok();
    let out = dir.join("report.csv");

    let res = ExportLogic::export_attendance(
        &sample_rows(),
        ExportFormat::Csv,
        &out.to_string_lossy(),
        true,
    );
    assert!(res.is_err());
}
