use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::calendar::CalendarUnit;
use super::extent::DateRange;
use super::primitives::{MS_PER_DAY, MS_PER_YEAR};
use super::slider::SliderScale;
use super::ticks::TickMark;

/// Time resolution the slider displays and snaps at.
///
/// The enum lists every level either strategy knows about; each strategy
/// publishes its own coarse-to-fine ordering slice, and only that slice
/// decides adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GranularityLevel {
    Decades,
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Deciseconds,
}

impl GranularityLevel {
    #[must_use]
    pub const fn unit(self) -> CalendarUnit {
        match self {
            Self::Decades => CalendarUnit::Decade,
            Self::Years => CalendarUnit::Year,
            Self::Months => CalendarUnit::Month,
            Self::Days => CalendarUnit::Day,
            Self::Hours => CalendarUnit::Hour,
            Self::Minutes => CalendarUnit::Minute,
            Self::Seconds => CalendarUnit::Second,
            Self::Deciseconds => CalendarUnit::Decisecond,
        }
    }

    /// Human-readable level name shown by the host.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decades => "Decades",
            Self::Years => "Years",
            Self::Months => "Months",
            Self::Days => "Days",
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
            Self::Deciseconds => "Deciseconds",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decades => "decades",
            Self::Years => "years",
            Self::Months => "months",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Deciseconds => "deciseconds",
        }
    }

    /// Nominal step duration; calendar-variable units use Julian averages.
    #[must_use]
    pub const fn nominal_millis(self) -> i64 {
        match self {
            Self::Decades => (10.0 * MS_PER_YEAR) as i64,
            Self::Years => MS_PER_YEAR as i64,
            Self::Months => (MS_PER_YEAR / 12.0) as i64,
            Self::Days => MS_PER_DAY,
            Self::Hours => 3_600_000,
            Self::Minutes => 60_000,
            Self::Seconds => 1_000,
            Self::Deciseconds => 100,
        }
    }
}

impl fmt::Display for GranularityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn level_index(order: &[GranularityLevel], level: GranularityLevel) -> Option<usize> {
    order.iter().position(|candidate| *candidate == level)
}

/// Adjacent finer level in `order`, or `None` at the fine end.
#[must_use]
pub fn finer_level(order: &[GranularityLevel], level: GranularityLevel) -> Option<GranularityLevel> {
    let index = level_index(order, level)?;
    order.get(index + 1).copied()
}

/// Adjacent coarser level in `order`, or `None` at the coarse end.
#[must_use]
pub fn coarser_level(
    order: &[GranularityLevel],
    level: GranularityLevel,
) -> Option<GranularityLevel> {
    let index = level_index(order, level)?;
    index.checked_sub(1).and_then(|i| order.get(i).copied())
}

/// Controller state handed to zoom planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomContext {
    pub bounds: DateRange,
    pub extent: DateRange,
    pub selection: DateRange,
    pub level: GranularityLevel,
    /// Extent on top of the zoom stack, if any.
    pub previous: Option<DateRange>,
}

/// Target of an accepted zoom transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomPlan {
    pub extent: DateRange,
    pub level: GranularityLevel,
    /// Selection to track after the transition; `None` keeps the current one.
    pub selection: Option<DateRange>,
}

/// Level-resolution strategy plugged into the slider controller.
///
/// Implementations are immutable; the controller owns every piece of
/// mutable state and asks the engine for decisions.
pub trait GranularityEngine {
    /// Coarse-to-fine ordering of the supported levels.
    fn order(&self) -> &'static [GranularityLevel];

    fn supports(&self, level: GranularityLevel) -> bool {
        self.order().contains(&level)
    }

    fn label(&self, level: GranularityLevel) -> &'static str {
        level.label()
    }

    fn format_thumb(&self, level: GranularityLevel, instant: NaiveDateTime) -> String;

    /// Level used when an extent is shown afresh (init, zoom, reset).
    fn initial_level(&self, extent: DateRange) -> GranularityLevel;

    /// Level for a selection of `selection_width_ms` while `current` is active.
    fn resolve_level(&self, selection_width_ms: i64, current: GranularityLevel) -> GranularityLevel;

    /// Natural extent: the whole unit of `level` containing `instant`.
    fn extent_for(&self, level: GranularityLevel, instant: NaiveDateTime) -> DateRange;

    fn slider_scale(&self, extent: DateRange, level: GranularityLevel) -> SliderScale;

    /// `None` when zooming in is not allowed from `context`.
    fn zoom_in_plan(&self, context: &ZoomContext) -> Option<ZoomPlan>;

    /// `None` when zooming out is not allowed from `context`.
    fn zoom_out_plan(&self, context: &ZoomContext) -> Option<ZoomPlan>;

    /// Extent to show when the host writes `value` from outside.
    fn accommodate(
        &self,
        value: DateRange,
        extent: DateRange,
        level: GranularityLevel,
        bounds: DateRange,
    ) -> DateRange;

    fn ticks_for(&self, extent: DateRange, level: GranularityLevel) -> Vec<TickMark>;
}
