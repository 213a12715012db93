use chrono::{Datelike, Days, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::primitives::{
    MS_PER_DAY, MS_PER_DECISECOND, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, at_time,
    date_from_ymd, millisecond_of, offset_millis,
};

/// Calendar units the slider can align to, coarse to fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    Decade,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Decisecond,
}

impl CalendarUnit {
    pub const ALL: [CalendarUnit; 8] = [
        CalendarUnit::Decade,
        CalendarUnit::Year,
        CalendarUnit::Month,
        CalendarUnit::Day,
        CalendarUnit::Hour,
        CalendarUnit::Minute,
        CalendarUnit::Second,
        CalendarUnit::Decisecond,
    ];

    /// Exact length for units that never vary with the calendar.
    ///
    /// Days are fixed because instants are zone-less wall-clock values.
    #[must_use]
    pub const fn fixed_millis(self) -> Option<i64> {
        match self {
            CalendarUnit::Decade | CalendarUnit::Year | CalendarUnit::Month => None,
            CalendarUnit::Day => Some(MS_PER_DAY),
            CalendarUnit::Hour => Some(MS_PER_HOUR),
            CalendarUnit::Minute => Some(MS_PER_MINUTE),
            CalendarUnit::Second => Some(MS_PER_SECOND),
            CalendarUnit::Decisecond => Some(MS_PER_DECISECOND),
        }
    }
}

/// First instant of the unit containing `instant`.
#[must_use]
pub fn start_of(unit: CalendarUnit, instant: NaiveDateTime) -> NaiveDateTime {
    let date = instant.date();
    match unit {
        CalendarUnit::Decade => {
            let year = instant.year().div_euclid(10) * 10;
            at_time(date_from_ymd(year, 1, 1), 0, 0, 0, 0)
        }
        CalendarUnit::Year => at_time(date_from_ymd(instant.year(), 1, 1), 0, 0, 0, 0),
        CalendarUnit::Month => at_time(
            date_from_ymd(instant.year(), instant.month(), 1),
            0,
            0,
            0,
            0,
        ),
        CalendarUnit::Day => at_time(date, 0, 0, 0, 0),
        CalendarUnit::Hour => at_time(date, instant.hour(), 0, 0, 0),
        CalendarUnit::Minute => at_time(date, instant.hour(), instant.minute(), 0, 0),
        CalendarUnit::Second => at_time(
            date,
            instant.hour(),
            instant.minute(),
            instant.second(),
            0,
        ),
        CalendarUnit::Decisecond => {
            let milli = millisecond_of(instant) / 100 * 100;
            at_time(
                date,
                instant.hour(),
                instant.minute(),
                instant.second(),
                milli,
            )
        }
    }
}

/// Last millisecond of the unit containing `instant` (e.g. Dec 31, 23:59:59.999).
#[must_use]
pub fn end_of(unit: CalendarUnit, instant: NaiveDateTime) -> NaiveDateTime {
    offset_millis(next_start(unit, start_of(unit, instant)), -1)
}

/// Start of the unit that follows the one containing `instant`.
#[must_use]
pub fn next_start(unit: CalendarUnit, instant: NaiveDateTime) -> NaiveDateTime {
    let start = start_of(unit, instant);
    match unit {
        CalendarUnit::Decade => at_time(date_from_ymd(start.year() + 10, 1, 1), 0, 0, 0, 0),
        CalendarUnit::Year => at_time(date_from_ymd(start.year() + 1, 1, 1), 0, 0, 0, 0),
        CalendarUnit::Month => month_start_offset(start, 1),
        CalendarUnit::Day => day_start_offset(start, 1),
        fixed => offset_millis(start, fixed.fixed_millis().unwrap_or(MS_PER_SECOND)),
    }
}

/// Rounds `instant` to the nearest boundary of `unit`.
///
/// Uses the component midpoint rule: the next-finer component decides
/// (month >= Jul for years, day >= 16 for months, hour >= 12 for days, ...).
/// Ties round up.
#[must_use]
pub fn snap_to(unit: CalendarUnit, instant: NaiveDateTime) -> NaiveDateTime {
    let round_up = match unit {
        CalendarUnit::Decade => instant.year().rem_euclid(10) >= 5,
        CalendarUnit::Year => instant.month() >= 7,
        CalendarUnit::Month => instant.day() >= 16,
        CalendarUnit::Day => instant.hour() >= 12,
        CalendarUnit::Hour => instant.minute() >= 30,
        CalendarUnit::Minute => instant.second() >= 30,
        CalendarUnit::Second => millisecond_of(instant) >= 500,
        CalendarUnit::Decisecond => millisecond_of(instant) % 100 >= 50,
    };

    if round_up {
        next_start(unit, instant)
    } else {
        start_of(unit, instant)
    }
}

/// First day of the month `offset` months away from the month containing `instant`.
#[must_use]
pub fn month_start_offset(instant: NaiveDateTime, offset: i64) -> NaiveDateTime {
    let index = i64::from(instant.year()) * 12 + i64::from(instant.month0()) + offset;
    let year = i32::try_from(index.div_euclid(12)).unwrap_or(if index < 0 {
        i32::MIN
    } else {
        i32::MAX
    });
    let month = index.rem_euclid(12) as u32 + 1;
    at_time(date_from_ymd(year, month, 1), 0, 0, 0, 0)
}

/// Midnight of the day `offset` calendar days away from the day containing `instant`.
#[must_use]
pub fn day_start_offset(instant: NaiveDateTime, offset: i64) -> NaiveDateTime {
    let date = instant.date();
    let shifted = if offset >= 0 {
        date.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    at_time(shifted.unwrap_or(date), 0, 0, 0, 0)
}

/// Whole-month distance between the months containing `start` and `end`.
#[must_use]
pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month0()) - i64::from(start.month0()))
}

#[cfg(test)]
mod tests {
    use super::{CalendarUnit, end_of, month_start_offset, next_start, snap_to, start_of};
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
            .expect("valid test instant")
    }

    #[test]
    fn decade_boundaries_floor_the_year() {
        let instant = dt(1997, 5, 3, 8, 0, 0, 0);
        assert_eq!(start_of(CalendarUnit::Decade, instant), dt(1990, 1, 1, 0, 0, 0, 0));
        assert_eq!(
            end_of(CalendarUnit::Decade, instant),
            dt(1999, 12, 31, 23, 59, 59, 999)
        );
    }

    #[test]
    fn month_end_tracks_leap_february() {
        let instant = dt(2024, 2, 10, 0, 0, 0, 0);
        assert_eq!(
            end_of(CalendarUnit::Month, instant),
            dt(2024, 2, 29, 23, 59, 59, 999)
        );
        let instant = dt(2023, 2, 10, 0, 0, 0, 0);
        assert_eq!(
            end_of(CalendarUnit::Month, instant),
            dt(2023, 2, 28, 23, 59, 59, 999)
        );
    }

    #[test]
    fn decisecond_floors_milliseconds() {
        let instant = dt(2024, 1, 1, 10, 0, 0, 456);
        assert_eq!(
            start_of(CalendarUnit::Decisecond, instant),
            dt(2024, 1, 1, 10, 0, 0, 400)
        );
        assert_eq!(
            end_of(CalendarUnit::Decisecond, instant),
            dt(2024, 1, 1, 10, 0, 0, 499)
        );
    }

    #[test]
    fn december_rolls_into_next_year() {
        let instant = dt(2024, 12, 20, 0, 0, 0, 0);
        assert_eq!(next_start(CalendarUnit::Month, instant), dt(2025, 1, 1, 0, 0, 0, 0));
        assert_eq!(month_start_offset(instant, -12), dt(2023, 12, 1, 0, 0, 0, 0));
    }

    #[test]
    fn snap_uses_midpoint_components() {
        assert_eq!(
            snap_to(CalendarUnit::Month, dt(2024, 3, 15, 23, 0, 0, 0)),
            dt(2024, 3, 1, 0, 0, 0, 0)
        );
        assert_eq!(
            snap_to(CalendarUnit::Day, dt(2024, 3, 15, 12, 0, 0, 0)),
            dt(2024, 3, 16, 0, 0, 0, 0)
        );
        assert_eq!(
            snap_to(CalendarUnit::Hour, dt(2024, 3, 15, 9, 29, 59, 0)),
            dt(2024, 3, 15, 9, 0, 0, 0)
        );
    }
}
