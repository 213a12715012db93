use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::calendar::{
    CalendarUnit, day_start_offset, month_start_offset, months_between, next_start, start_of,
};
use super::primitives::{at_time, ceil_div, date_from_ymd, offset_millis, span_millis};

/// Target upper bound of regular ticks per extent.
pub const MAX_MINOR_TICKS: i64 = 7;

/// Major ticks closer than this ratio to either edge are dropped.
pub const MAJOR_EDGE_GUARD_RATIO: f64 = 0.02;

/// Hard cap on generated major boundaries for a single extent.
pub const MAX_MAJOR_TICKS: usize = 256;

pub type TickDates = SmallVec<[NaiveDateTime; 16]>;

/// Tick descriptor rendered by the host under the slider track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Percentage of the extent, `0.0..=100.0`.
    pub position: f64,
    pub label: String,
    pub major: bool,
    /// Parent-unit label for major ticks (e.g. `Mar` on a day-level month start).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_label: Option<String>,
    pub time: NaiveDateTime,
}

/// Fraction of the extent covered up to `instant`.
#[must_use]
pub fn extent_ratio(instant: NaiveDateTime, extent_start: NaiveDateTime, extent_ms: i64) -> f64 {
    if extent_ms <= 0 {
        return 0.0;
    }
    span_millis(extent_start, instant) as f64 / extent_ms as f64
}

/// Boundaries of `parent` strictly after the parent unit containing `start`
/// and no later than `end`.
#[must_use]
pub fn major_tick_dates(start: NaiveDateTime, end: NaiveDateTime, parent: CalendarUnit) -> TickDates {
    let mut dates = TickDates::new();
    let mut current = next_start(parent, start);
    while current <= end && dates.len() < MAX_MAJOR_TICKS {
        dates.push(current);
        let next = next_start(parent, current);
        if next <= current {
            break;
        }
        current = next;
    }
    dates
}

/// Regular boundaries of `unit` covering `[start, end]` with an adaptive step.
///
/// Month and day stepping use calendar increments; finer units step by a
/// fixed number of milliseconds. The first boundary may precede `start`.
#[must_use]
pub fn minor_tick_dates(start: NaiveDateTime, end: NaiveDateTime, unit: CalendarUnit) -> TickDates {
    let mut dates = TickDates::new();
    if end < start {
        return dates;
    }

    match unit {
        CalendarUnit::Decade | CalendarUnit::Year => {
            let scale = if unit == CalendarUnit::Decade { 10 } else { 1 };
            let start_index = start.year().div_euclid(scale);
            let end_index = end.year().div_euclid(scale);
            let step = ceil_div(i64::from(end_index - start_index), MAX_MINOR_TICKS).max(1) as i32;
            let first = (f64::from(start_index) / f64::from(step)).ceil() as i32 * step;
            let mut index = first;
            while index <= end_index {
                dates.push(at_time(date_from_ymd(index * scale, 1, 1), 0, 0, 0, 0));
                index += step;
            }
        }
        CalendarUnit::Month => {
            let step = ceil_div(months_between(start, end), MAX_MINOR_TICKS).max(1);
            let mut current = start_of(CalendarUnit::Month, start);
            while current <= end {
                dates.push(current);
                let next = month_start_offset(current, step);
                if next <= current {
                    break;
                }
                current = next;
            }
        }
        CalendarUnit::Day => {
            let total = ceil_div(span_millis(start, end), CalendarUnit::Day.fixed_millis().unwrap_or(1));
            let step = ceil_div(total, MAX_MINOR_TICKS).max(1);
            let mut current = start_of(CalendarUnit::Day, start);
            while current <= end {
                dates.push(current);
                let next = day_start_offset(current, step);
                if next <= current {
                    break;
                }
                current = next;
            }
        }
        fixed => {
            let unit_ms = fixed.fixed_millis().unwrap_or(1);
            let total = ceil_div(span_millis(start, end), unit_ms);
            let step_ms = ceil_div(total, MAX_MINOR_TICKS).max(1) * unit_ms;
            let mut current = start_of(fixed, start);
            while current <= end {
                dates.push(current);
                let next = offset_millis(current, step_ms);
                if next <= current {
                    break;
                }
                current = next;
            }
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::{major_tick_dates, minor_tick_dates};
    use crate::core::CalendarUnit;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid test date")
    }

    #[test]
    fn month_majors_are_first_days_after_start() {
        let dates = major_tick_dates(day(2024, 1, 15), day(2024, 4, 1), CalendarUnit::Month);
        assert_eq!(
            dates.as_slice(),
            &[day(2024, 2, 1), day(2024, 3, 1), day(2024, 4, 1)]
        );
    }

    #[test]
    fn year_minors_align_to_step_multiples() {
        let dates = minor_tick_dates(day(1995, 9, 3), day(2026, 2, 11), CalendarUnit::Year);
        let years: Vec<i32> = dates.iter().map(chrono::Datelike::year).collect();
        assert_eq!(years, vec![1995, 2000, 2005, 2010, 2015, 2020, 2025]);
    }

    #[test]
    fn month_minors_step_by_calendar_months() {
        let dates = minor_tick_dates(day(2024, 1, 1), day(2024, 12, 31), CalendarUnit::Month);
        assert_eq!(dates.first().copied(), Some(day(2024, 1, 1)));
        assert_eq!(dates.get(1).copied(), Some(day(2024, 3, 1)));
        assert!(dates.len() <= 8);
    }
}
