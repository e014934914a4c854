use crate::errors::{AppError, AppResult};
use crate::models::{ClockEvent, DailyAttendance, EmployeeDay, Punch};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Events up to and including this hour are clock-in candidates.
pub const DEFAULT_IN_CUTOFF_HOUR: u32 = 9;

/// Side of the day an event is a candidate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    In,
    Out,
}

/// Groups clock events into first-in / last-out rows per employee-day.
#[derive(Debug, Clone, Copy)]
pub struct DailyAggregator {
    cutoff_hour: u32,
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_IN_CUTOFF_HOUR,
        }
    }
}

impl DailyAggregator {
    pub fn new(cutoff_hour: u32) -> AppResult<Self> {
        if cutoff_hour > 23 {
            return Err(AppError::InvalidCutoff(cutoff_hour));
        }
        Ok(Self { cutoff_hour })
    }

    pub fn cutoff_hour(&self) -> u32 {
        self.cutoff_hour
    }

    /// hour <= cutoff → In, otherwise Out.
    pub fn classify(&self, ev: &ClockEvent) -> Side {
        if ev.hour() <= self.cutoff_hour {
            Side::In
        } else {
            Side::Out
        }
    }

    /// Build one row per distinct (employee id, name, date).
    ///
    /// Rows come back sorted by that key. When several events share the
    /// extreme timestamp of a side, the first one in input order wins.
    pub fn aggregate(&self, events: &[ClockEvent]) -> Vec<DailyAttendance> {
        let mut firsts: BTreeMap<EmployeeDay, &ClockEvent> = BTreeMap::new();
        let mut lasts: BTreeMap<EmployeeDay, &ClockEvent> = BTreeMap::new();

        // -----------------------------
        // Min per group (in) / max per group (out)
        // -----------------------------
        for ev in events {
            let key = EmployeeDay {
                employee_id: ev.employee_id.clone(),
                name: ev.name.clone(),
                date: ev.date(),
            };

            match self.classify(ev) {
                Side::In => keep_if(&mut firsts, key, ev, |cand, cur| cand < cur),
                Side::Out => keep_if(&mut lasts, key, ev, |cand, cur| cand > cur),
            }
        }

        // -----------------------------
        // Full outer merge
        // -----------------------------
        let mut merged: BTreeMap<EmployeeDay, (Option<Punch>, Option<Punch>)> = BTreeMap::new();

        for (key, ev) in firsts {
            merged.entry(key).or_default().0 = Some(punch(ev));
        }
        for (key, ev) in lasts {
            merged.entry(key).or_default().1 = Some(punch(ev));
        }

        merged
            .into_iter()
            .map(|(key, (clock_in, clock_out))| DailyAttendance::new(key, clock_in, clock_out))
            .collect()
    }
}

/// Aggregate with the default cutoff hour.
pub fn aggregate(events: &[ClockEvent]) -> Vec<DailyAttendance> {
    DailyAggregator::default().aggregate(events)
}

// Replace the current winner only when `better` holds strictly.
fn keep_if<'a>(
    map: &mut BTreeMap<EmployeeDay, &'a ClockEvent>,
    key: EmployeeDay,
    ev: &'a ClockEvent,
    better: impl Fn(&chrono::NaiveDateTime, &chrono::NaiveDateTime) -> bool,
) {
    match map.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(ev);
        }
        Entry::Occupied(mut slot) => {
            if better(&ev.timestamp, &slot.get().timestamp) {
                slot.insert(ev);
            }
        }
    }
}

fn punch(ev: &ClockEvent) -> Punch {
    Punch {
        time: ev.time(),
        terminal: ev.terminal.clone(),
    }
}
