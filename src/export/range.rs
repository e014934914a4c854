// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_last_day, parse_iso_date};
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `all` (any case) means no bounds and yields `Ok(None)`.
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let bounds = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(invalid(r, "start and end must have the same format"));
            }
            let (d1, _) = period_bounds(start).ok_or_else(|| invalid(r, "invalid start"))?;
            let (_, d2) = period_bounds(end).ok_or_else(|| invalid(r, "invalid end"))?;
            (d1, d2)
        }
        None => period_bounds(r).ok_or_else(|| invalid(r, "unsupported format"))?,
    };

    if bounds.0 > bounds.1 {
        return Err(invalid(r, "start is after end"));
    }

    Ok(Some(bounds))
}

/// First and last day covered by a single period (year, month or day).
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-')?;
            let y: i32 = ys.parse().ok()?;
            let m: u32 = ms.parse().ok()?;
            let last = month_last_day(y, m)?;
            Some((
                NaiveDate::from_ymd_opt(y, m, 1)?,
                NaiveDate::from_ymd_opt(y, m, last)?,
            ))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_iso_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("--range '{r}': {why}"))
}
