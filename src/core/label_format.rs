//! Fixed-table label formatting for thumbs and ticks.
//!
//! Month names come from [`MONTH_ABBREVIATIONS`]; no locale lookup happens.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::calendar::CalendarUnit;
use super::primitives::millisecond_of;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[must_use]
pub fn month_abbreviation(instant: NaiveDateTime) -> &'static str {
    MONTH_ABBREVIATIONS[instant.month0() as usize % 12]
}

/// `1990s`
#[must_use]
pub fn format_decade(instant: NaiveDateTime) -> String {
    format!("{}s", instant.year().div_euclid(10) * 10)
}

/// `2024`
#[must_use]
pub fn format_year(instant: NaiveDateTime) -> String {
    instant.year().to_string()
}

/// `Mar 2024`
#[must_use]
pub fn format_month(instant: NaiveDateTime) -> String {
    format!("{} {}", month_abbreviation(instant), instant.year())
}

/// `Mar 16`
#[must_use]
pub fn format_day(instant: NaiveDateTime) -> String {
    format!("{} {}", month_abbreviation(instant), instant.day())
}

/// `14:05`
#[must_use]
pub fn format_minute(instant: NaiveDateTime) -> String {
    format!("{:02}:{:02}", instant.hour(), instant.minute())
}

/// `14:05:09`
#[must_use]
pub fn format_second(instant: NaiveDateTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

/// `14:05:09.3`
#[must_use]
pub fn format_decisecond(instant: NaiveDateTime) -> String {
    format!(
        "{}.{}",
        format_second(instant),
        millisecond_of(instant) / 100
    )
}

/// Context-rich label shown next to a thumb.
#[must_use]
pub fn format_thumb(unit: CalendarUnit, instant: NaiveDateTime) -> String {
    match unit {
        CalendarUnit::Decade => format_decade(instant),
        CalendarUnit::Year => format_year(instant),
        CalendarUnit::Month => format_month(instant),
        CalendarUnit::Day => format!("{}, {}", format_day(instant), instant.year()),
        CalendarUnit::Hour => format!("{}, {:02}:00", format_day(instant), instant.hour()),
        CalendarUnit::Minute => format!("{}, {}", format_day(instant), format_minute(instant)),
        CalendarUnit::Second => format!("{}, {}", format_day(instant), format_second(instant)),
        CalendarUnit::Decisecond => format_decisecond(instant),
    }
}

/// Compact label shown under a tick mark.
///
/// Month ticks print the bare month name, except on January 1st where the
/// year replaces it so the year boundary stays readable.
#[must_use]
pub fn format_tick(unit: CalendarUnit, instant: NaiveDateTime) -> String {
    match unit {
        CalendarUnit::Decade => format_decade(instant),
        CalendarUnit::Year => format_year(instant),
        CalendarUnit::Month => {
            if instant.month() == 1 {
                format_year(instant)
            } else {
                month_abbreviation(instant).to_owned()
            }
        }
        CalendarUnit::Day => format_day(instant),
        CalendarUnit::Hour => format!("{:02}:00", instant.hour()),
        CalendarUnit::Minute => format_minute(instant),
        CalendarUnit::Second => format_second(instant),
        CalendarUnit::Decisecond => format_decisecond(instant),
    }
}
