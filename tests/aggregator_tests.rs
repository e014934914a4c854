mod common;
use common::{date, ev};
use rattendance::core::aggregator::Side;
use rattendance::core::logic::Core;
use rattendance::export::range::parse_range;
use rattendance::errors::AppError;
use rattendance::models::attendance::weekday_name;
use rattendance::{DailyAggregator, aggregate};
use std::collections::BTreeSet;

#[test]
fn test_first_in_and_last_out() {
    let events = vec![
        ev("1001", "John Smith", "01-01-2024 08:45:00", "Side Door"),
        ev("1001", "John Smith", "01-01-2024 17:00:00", "Main Gate"),
        ev("1001", "John Smith", "01-01-2024 07:00:00", "Main Gate"),
        ev("1001", "John Smith", "01-01-2024 18:30:00", "Back Exit"),
    ];

    let rows = aggregate(&events);
    assert_eq!(rows.len(), 1);

    let r = &rows[0];
    assert_eq!(r.employee_id, "1001");
    assert_eq!(r.name, "John Smith");
    assert_eq!(r.date, date("01-01-2024"));
    assert_eq!(r.clock_in_time().as_deref(), Some("07:00"));
    assert_eq!(r.terminal_in(), Some("Main Gate"));
    assert_eq!(r.clock_out_time().as_deref(), Some("18:30"));
    assert_eq!(r.terminal_out(), Some("Back Exit"));
    assert_eq!(r.weekday(), "Monday");
}

#[test]
fn test_hour_nine_counts_as_clock_in() {
    let rows = aggregate(&[ev("1002", "Ana", "02-01-2024 09:30:00", "Lobby")]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].clock_in_time().as_deref(), Some("09:30"));
    assert!(rows[0].clock_out.is_none());
}

#[test]
fn test_partition_boundaries() {
    let agg = DailyAggregator::default();

    assert_eq!(agg.classify(&ev("1", "A", "01-01-2024 00:00:00", "T")), Side::In);
    assert_eq!(agg.classify(&ev("1", "A", "01-01-2024 09:59:59", "T")), Side::In);
    assert_eq!(agg.classify(&ev("1", "A", "01-01-2024 10:00:00", "T")), Side::Out);
    assert_eq!(agg.classify(&ev("1", "A", "01-01-2024 23:59:59", "T")), Side::Out);
}

#[test]
fn test_in_only_and_out_only_rows() {
    let rows = aggregate(&[
        ev("A", "In Only", "03-01-2024 08:00:00", "Gate 1"),
        ev("B", "Out Only", "03-01-2024 16:05:59", "Gate 2"),
    ]);

    assert_eq!(rows.len(), 2);

    let in_only = &rows[0];
    assert_eq!(in_only.employee_id, "A");
    assert_eq!(in_only.clock_in_time().as_deref(), Some("08:00"));
    assert_eq!(in_only.clock_out_time(), None);
    assert_eq!(in_only.terminal_out(), None);

    let out_only = &rows[1];
    assert_eq!(out_only.employee_id, "B");
    assert_eq!(out_only.clock_in_time(), None);
    assert_eq!(out_only.terminal_in(), None);
    // seconds are truncated, not rounded
    assert_eq!(out_only.clock_out_time().as_deref(), Some("16:05"));
    assert_eq!(out_only.terminal_out(), Some("Gate 2"));
}

#[test]
fn test_two_out_candidates_keep_the_latest() {
    let rows = aggregate(&[
        ev("9", "Zed", "05-01-2024 18:30:00", "Late"),
        ev("9", "Zed", "05-01-2024 17:00:00", "Early"),
    ]);

    assert_eq!(rows[0].clock_out_time().as_deref(), Some("18:30"));
    assert_eq!(rows[0].terminal_out(), Some("Late"));
    assert!(rows[0].clock_in.is_none());
}

#[test]
fn test_ties_keep_first_in_input_order() {
    let rows = aggregate(&[
        ev("1", "A", "01-01-2024 08:00:00", "first-in"),
        ev("1", "A", "01-01-2024 08:00:00", "second-in"),
        ev("1", "A", "01-01-2024 19:00:00", "first-out"),
        ev("1", "A", "01-01-2024 19:00:00", "second-out"),
    ]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].terminal_in(), Some("first-in"));
    assert_eq!(rows[0].terminal_out(), Some("first-out"));
}

#[test]
fn test_same_id_with_two_names_stays_split() {
    let rows = aggregate(&[
        ev("77", "Jon Doe", "04-01-2024 08:00:00", "T"),
        ev("77", "John Doe", "04-01-2024 17:00:00", "T"),
    ]);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.employee_id == "77"));
    assert!(rows.iter().all(|r| r.clock_in.is_some() != r.clock_out.is_some()));
}

#[test]
fn test_days_are_separate_groups() {
    let rows = aggregate(&[
        ev("5", "Eve", "01-01-2024 08:00:00", "T"),
        ev("5", "Eve", "02-01-2024 08:10:00", "T"),
        ev("5", "Eve", "01-01-2024 17:00:00", "T"),
    ]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, date("01-01-2024"));
    assert!(rows[0].clock_in.is_some() && rows[0].clock_out.is_some());
    assert_eq!(rows[1].date, date("02-01-2024"));
    assert!(rows[1].clock_out.is_none());
}

#[test]
fn test_every_employee_day_appears_once() {
    let events = vec![
        ev("2", "B", "01-01-2024 07:00:00", "T"),
        ev("1", "A", "01-01-2024 12:00:00", "T"),
        ev("2", "B", "01-01-2024 07:30:00", "T"),
        ev("1", "A", "02-01-2024 06:00:00", "T"),
        ev("3", "C", "01-01-2024 22:00:00", "T"),
        ev("1", "A", "01-01-2024 09:00:00", "T"),
        ev("2", "B", "03-01-2024 11:00:00", "T"),
    ];

    let expected: BTreeSet<(String, String, chrono::NaiveDate)> = events
        .iter()
        .map(|e| (e.employee_id.clone(), e.name.clone(), e.date()))
        .collect();

    let rows = aggregate(&events);
    let got: Vec<(String, String, chrono::NaiveDate)> = rows
        .iter()
        .map(|r| (r.employee_id.clone(), r.name.clone(), r.date))
        .collect();

    // sorted by key, no duplicates, nothing lost
    assert_eq!(got, expected.into_iter().collect::<Vec<_>>());
    assert!(rows.iter().all(|r| r.clock_in.is_some() || r.clock_out.is_some()));
}

#[test]
fn test_aggregate_is_repeatable_and_order_independent() {
    let events = vec![
        ev("1", "A", "01-01-2024 07:00:00", "T1"),
        ev("1", "A", "01-01-2024 08:00:00", "T2"),
        ev("1", "A", "01-01-2024 17:00:00", "T3"),
        ev("2", "B", "01-01-2024 19:00:00", "T4"),
        ev("2", "B", "02-01-2024 06:59:00", "T5"),
    ];

    let first = aggregate(&events);
    let second = aggregate(&events);
    assert_eq!(first, second);

    let mut reversed = events.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed), first);
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_custom_cutoff_hour() {
    let events = vec![ev("1", "A", "01-01-2024 09:30:00", "T")];

    let early = DailyAggregator::new(8).expect("valid cutoff");
    let rows = early.aggregate(&events);
    assert!(rows[0].clock_in.is_none());
    assert_eq!(rows[0].clock_out_time().as_deref(), Some("09:30"));

    let late = DailyAggregator::new(12).expect("valid cutoff");
    let rows = late.aggregate(&[ev("1", "A", "01-01-2024 12:59:00", "T")]);
    assert_eq!(rows[0].clock_in_time().as_deref(), Some("12:59"));
}

#[test]
fn test_invalid_cutoff_is_rejected() {
    assert!(DailyAggregator::new(23).is_ok());
    assert!(matches!(
        DailyAggregator::new(24),
        Err(AppError::InvalidCutoff(24))
    ));
}

#[test]
fn test_weekday_names() {
    assert_eq!(aggregate(&[ev("1", "A", "01-01-2024 08:00:00", "T")])[0].weekday(), "Monday");
    assert_eq!(aggregate(&[ev("1", "A", "06-01-2024 08:00:00", "T")])[0].weekday(), "Saturday");
    assert_eq!(aggregate(&[ev("1", "A", "29-02-2024 08:00:00", "T")])[0].weekday(), "Thursday");
    assert_eq!(weekday_name(chrono::Weekday::Sun), "Sunday");
}

#[test]
fn test_date_is_rendered_day_first() {
    let rows = aggregate(&[ev("1", "A", "09-03-2024 08:00:00", "T")]);
    assert_eq!(rows[0].date_str(), "09-03-2024");
}

#[test]
fn test_daily_report_window_is_inclusive() {
    let events = vec![
        ev("1", "A", "31-12-2023 08:00:00", "Gate"),
        ev("1", "A", "01-01-2024 08:00:00", "Gate"),
        ev("1", "A", "31-01-2024 17:00:00", "Gate"),
        ev("1", "A", "01-02-2024 08:00:00", "Gate"),
    ];
    let agg = DailyAggregator::default();

    let bounds = parse_range("2024-01").expect("month range");
    let rows = Core::build_daily_report(&events, &agg, bounds);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date("01-01-2024"), date("31-01-2024")]);

    assert_eq!(Core::build_daily_report(&events, &agg, None).len(), 4);

    // reversed windows never reach the report
    assert!(parse_range("2024-02:2024-01").is_err());
}
