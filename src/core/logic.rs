use crate::core::aggregator::DailyAggregator;
use crate::core::parser::{ParseReport, parse_lines};
use crate::core::source::read_lines;
use crate::errors::AppResult;
use crate::models::{ClockEvent, DailyAttendance};
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;

/// How many offending line numbers are listed in the skip warning.
const SKIP_PREVIEW: usize = 5;

pub struct Core;

impl Core {
    /// Read `input` and parse it, reporting skipped lines on the console.
    ///
    /// With `strict`, the first malformed line becomes an error.
    pub fn load_events(input: &str, strict: bool) -> AppResult<Vec<ClockEvent>> {
        let report = Self::parse_input(input)?;

        info(format!(
            "Parsed {} clock events from {} lines",
            report.events.len(),
            report.total_lines()
        ));

        if report.has_skipped() {
            warn_skipped(&report);
        }

        if strict {
            report.into_strict()
        } else {
            Ok(report.events)
        }
    }

    /// Read and parse without any console output.
    pub fn parse_input(input: &str) -> AppResult<ParseReport> {
        let lines = read_lines(input)?;
        Ok(parse_lines(&lines))
    }

    /// Aggregate and keep only the rows whose date falls inside `bounds`
    /// (inclusive, as produced by `parse_range`).
    pub fn build_daily_report(
        events: &[ClockEvent],
        aggregator: &DailyAggregator,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<DailyAttendance> {
        let rows = aggregator.aggregate(events);

        match bounds {
            None => rows,
            Some((start, end)) => rows
                .into_iter()
                .filter(|r| r.date >= start && r.date <= end)
                .collect(),
        }
    }
}

fn warn_skipped(report: &ParseReport) {
    let preview: Vec<String> = report
        .skipped
        .iter()
        .take(SKIP_PREVIEW)
        .map(|s| s.line_no.to_string())
        .collect();

    let more = if report.skipped.len() > SKIP_PREVIEW {
        ", ..."
    } else {
        ""
    };

    warning(format!(
        "Skipped {} malformed line(s) (lines {}{})",
        report.skipped.len(),
        preview.join(", "),
        more
    ));
}
