#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::ClockEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Raw log used by most CLI tests.
///
/// Line 7 is blank, lines 8 and 9 are malformed.
pub const SAMPLE_LOG: &str = "\
1001 John Smith 01-01-2024 07:00:00 Main Gate
1001 John Smith 01-01-2024 08:45:00 Side Door
1001 John Smith 01-01-2024 17:00:00 Main Gate
1001 John Smith 01-01-2024 18:30:00 Back Exit
1002 Ana Maria Lopez 02-01-2024 09:30:00 Lobby Terminal 2
1003 Omar 03-01-2024 16:05:59 Warehouse

garbage line
1004 Bad Date 32-01-2024 08:00:00 Gate
";

pub fn rta() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_log(name: &str, content: &str) -> String {
    let p = temp_path(name, "txt");
    fs::write(&p, content).expect("write sample log");
    p
}

/// Config path for an isolated run (file not created).
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%d-%m-%Y %H:%M:%S").expect("valid test timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%d-%m-%Y").expect("valid test date")
}

pub fn ev(id: &str, name: &str, when: &str, terminal: &str) -> ClockEvent {
    ClockEvent::new(id, name, ts(when), terminal)
}
