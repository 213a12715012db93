use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub const MS_PER_DECISECOND: i64 = 100;
pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Average Julian year, used wherever a year has to be expressed as a fixed span.
pub const MS_PER_YEAR: f64 = 365.25 * MS_PER_DAY as f64;

/// Wall-clock instant expressed as milliseconds since 1970-01-01T00:00:00.
///
/// Instants carry no zone: they are local wall-clock readings and are mapped
/// onto the epoch axis as if they were UTC.
#[must_use]
pub fn to_epoch_millis(instant: NaiveDateTime) -> i64 {
    instant.and_utc().timestamp_millis()
}

/// Inverse of [`to_epoch_millis`], saturating at chrono's representable range.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> NaiveDateTime {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.naive_utc(),
        None if millis < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

/// Signed distance `end - start` in milliseconds.
#[must_use]
pub fn span_millis(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    to_epoch_millis(end).saturating_sub(to_epoch_millis(start))
}

#[must_use]
pub fn offset_millis(instant: NaiveDateTime, delta_ms: i64) -> NaiveDateTime {
    from_epoch_millis(to_epoch_millis(instant).saturating_add(delta_ms))
}

/// Bounds `instant` to `[min, max]`.
#[must_use]
pub fn clamp_instant(instant: NaiveDateTime, min: NaiveDateTime, max: NaiveDateTime) -> NaiveDateTime {
    if instant < min {
        min
    } else if instant > max {
        max
    } else {
        instant
    }
}

/// Millisecond-of-second component.
#[must_use]
pub fn millisecond_of(instant: NaiveDateTime) -> u32 {
    instant.and_utc().timestamp_subsec_millis().min(999)
}

/// Builds a calendar date, saturating at chrono's supported year range.
pub(crate) fn date_from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

pub(crate) fn at_time(date: NaiveDate, hour: u32, minute: u32, second: u32, milli: u32) -> NaiveDateTime {
    date.and_hms_milli_opt(hour, minute, second, milli)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

/// Integer ceiling division for non-negative numerators and positive divisors.
pub(crate) fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    if divisor <= 0 {
        return numerator;
    }
    if numerator <= 0 {
        return 0;
    }
    (numerator + divisor - 1) / divisor
}
