// src/export/excel_date.rs

use crate::export::model::CellKind;
use crate::models::attendance::{DATE_FORMAT, TIME_FORMAT};
use crate::models::clock_event::CLOCKING_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Interpret a report cell as an Excel serial according to its column kind,
/// returning the number format to apply and the serial value.
///
/// Text columns and cells that do not parse yield `None` (written as text).
pub(crate) fn to_excel_serial(kind: CellKind, s: &str) -> Option<(&'static str, f64)> {
    match kind {
        CellKind::Text => None,
        CellKind::Date => {
            let d = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
            Some(("dd-mm-yyyy", date_serial(d)))
        }
        CellKind::Time => {
            let t = NaiveTime::parse_from_str(s, TIME_FORMAT).ok()?;
            Some(("hh:mm", time_fraction(t)))
        }
        CellKind::DateTime => {
            let dt = NaiveDateTime::parse_from_str(s, CLOCKING_FORMAT).ok()?;
            Some((
                "dd-mm-yyyy hh:mm:ss",
                date_serial(dt.date()) + time_fraction(dt.time()),
            ))
        }
    }
}

// Excel's day 0 is 1899-12-30 (1900 leap-year bug included).
fn date_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

fn time_fraction(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
