//! Adaptive granularity: the level follows the selection width with hysteresis.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;

use super::calendar::{CalendarUnit, end_of, start_of};
use super::extent::DateRange;
use super::granularity::{
    GranularityEngine, GranularityLevel, ZoomContext, ZoomPlan, coarser_level, level_index,
};
use super::label_format::{format_thumb, format_tick};
use super::primitives::{
    MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_YEAR, span_millis, to_epoch_millis,
};
use super::slider::SliderScale;
use super::ticks::{
    MAJOR_EDGE_GUARD_RATIO, TickMark, extent_ratio, major_tick_dates, minor_tick_dates,
};

pub const ADAPTIVE_ORDER: [GranularityLevel; 6] = [
    GranularityLevel::Years,
    GranularityLevel::Months,
    GranularityLevel::Days,
    GranularityLevel::Hours,
    GranularityLevel::Minutes,
    GranularityLevel::Seconds,
];

/// Hysteresis thresholds of one level, in milliseconds.
///
/// `narrow_below`: a selection narrower than this may drop into the level.
/// `widen_above`: while at the level, a wider selection steps one level coarser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdEntry {
    pub level: GranularityLevel,
    pub narrow_below: f64,
    pub widen_above: f64,
}

const DAY: f64 = MS_PER_DAY as f64;
const HOUR: f64 = MS_PER_HOUR as f64;
const MINUTE: f64 = MS_PER_MINUTE as f64;

pub static ADAPTIVE_THRESHOLDS: [ThresholdEntry; 6] = [
    ThresholdEntry {
        level: GranularityLevel::Years,
        narrow_below: f64::INFINITY,
        widen_above: f64::INFINITY,
    },
    ThresholdEntry {
        level: GranularityLevel::Months,
        narrow_below: 5.0 * MS_PER_YEAR,
        widen_above: 8.0 * MS_PER_YEAR,
    },
    ThresholdEntry {
        level: GranularityLevel::Days,
        narrow_below: 90.0 * DAY,
        widen_above: 400.0 * DAY,
    },
    ThresholdEntry {
        level: GranularityLevel::Hours,
        narrow_below: 3.0 * DAY,
        widen_above: 10.0 * DAY,
    },
    ThresholdEntry {
        level: GranularityLevel::Minutes,
        narrow_below: 2.0 * HOUR,
        widen_above: 8.0 * HOUR,
    },
    ThresholdEntry {
        level: GranularityLevel::Seconds,
        narrow_below: 5.0 * MINUTE,
        widen_above: 15.0 * MINUTE,
    },
];

/// Per-level presentation config: label plus the calendar unit used for
/// formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveLevelConfig {
    pub level: GranularityLevel,
    pub label: &'static str,
    pub unit: CalendarUnit,
}

impl AdaptiveLevelConfig {
    #[must_use]
    pub fn format_thumb(&self, instant: NaiveDateTime) -> String {
        format_thumb(self.unit, instant)
    }

    #[must_use]
    pub fn format_tick(&self, instant: NaiveDateTime) -> String {
        format_tick(self.unit, instant)
    }
}

const fn adaptive_config(level: GranularityLevel) -> AdaptiveLevelConfig {
    AdaptiveLevelConfig {
        level,
        label: level.label(),
        unit: level.unit(),
    }
}

pub static ADAPTIVE_CONFIGS: [AdaptiveLevelConfig; 6] = [
    adaptive_config(GranularityLevel::Years),
    adaptive_config(GranularityLevel::Months),
    adaptive_config(GranularityLevel::Days),
    adaptive_config(GranularityLevel::Hours),
    adaptive_config(GranularityLevel::Minutes),
    adaptive_config(GranularityLevel::Seconds),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveGranularity;

impl AdaptiveGranularity {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn config(&self, level: GranularityLevel) -> Option<&'static AdaptiveLevelConfig> {
        ADAPTIVE_CONFIGS.iter().find(|config| config.level == level)
    }

    /// Next level for a selection of `selection_ms` while `current` is active.
    ///
    /// Narrowing may jump several levels at once as long as every level in
    /// between qualifies too; widening moves exactly one level per call and
    /// only when the current level's own `widen_above` is exceeded.
    #[must_use]
    pub fn determine_granularity(
        &self,
        selection_ms: i64,
        current: GranularityLevel,
    ) -> GranularityLevel {
        let Some(current_index) = level_index(&ADAPTIVE_ORDER, current) else {
            return self.initial_granularity(selection_ms);
        };
        let width = selection_ms as f64;

        for candidate in (current_index + 1..ADAPTIVE_THRESHOLDS.len()).rev() {
            let all_qualify = ADAPTIVE_THRESHOLDS[current_index + 1..=candidate]
                .iter()
                .all(|entry| width < entry.narrow_below);
            if all_qualify {
                return ADAPTIVE_THRESHOLDS[candidate].level;
            }
        }

        if width > ADAPTIVE_THRESHOLDS[current_index].widen_above {
            if let Some(coarser) = coarser_level(&ADAPTIVE_ORDER, current) {
                return coarser;
            }
        }

        current
    }

    /// Finest level whose `narrow_below` exceeds `range_ms`; no hysteresis.
    #[must_use]
    pub fn initial_granularity(&self, range_ms: i64) -> GranularityLevel {
        let width = range_ms as f64;
        ADAPTIVE_THRESHOLDS
            .iter()
            .skip(1)
            .rev()
            .find(|entry| width < entry.narrow_below)
            .map_or(ADAPTIVE_ORDER[0], |entry| entry.level)
    }

    /// Major (parent boundary) and minor ticks for `[range_start, range_end]`,
    /// positioned against `[extent_start, extent_end]` and sorted by position.
    #[must_use]
    pub fn generate_ticks(
        &self,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
        level: GranularityLevel,
        extent_start: NaiveDateTime,
        extent_end: NaiveDateTime,
    ) -> Vec<TickMark> {
        let extent_ms = span_millis(extent_start, extent_end);
        if extent_ms <= 0 {
            return Vec::new();
        }
        let unit = level.unit();

        let mut ticks = Vec::new();
        let mut major_timestamps = HashSet::new();

        if let Some(parent) = coarser_level(&ADAPTIVE_ORDER, level) {
            for date in major_tick_dates(range_start, range_end, parent.unit()) {
                let ratio = extent_ratio(date, extent_start, extent_ms);
                if ratio > MAJOR_EDGE_GUARD_RATIO && ratio < 1.0 - MAJOR_EDGE_GUARD_RATIO {
                    ticks.push(TickMark {
                        position: ratio * 100.0,
                        label: format_tick(unit, date),
                        major: true,
                        major_label: Some(format_tick(parent.unit(), date)),
                        time: date,
                    });
                    major_timestamps.insert(to_epoch_millis(date));
                }
            }
        }

        for date in minor_tick_dates(range_start, range_end, unit) {
            if major_timestamps.contains(&to_epoch_millis(date)) {
                continue;
            }
            let ratio = extent_ratio(date, extent_start, extent_ms);
            if (0.0..=1.0).contains(&ratio) {
                ticks.push(TickMark {
                    position: ratio * 100.0,
                    label: format_tick(unit, date),
                    major: false,
                    major_label: None,
                    time: date,
                });
            }
        }

        ticks.sort_by_key(|tick| OrderedFloat(tick.position));
        ticks
    }
}

impl GranularityEngine for AdaptiveGranularity {
    fn order(&self) -> &'static [GranularityLevel] {
        &ADAPTIVE_ORDER
    }

    fn label(&self, level: GranularityLevel) -> &'static str {
        self.config(level).map_or(level.label(), |config| config.label)
    }

    fn format_thumb(&self, level: GranularityLevel, instant: NaiveDateTime) -> String {
        match self.config(level) {
            Some(config) => config.format_thumb(instant),
            None => format_thumb(level.unit(), instant),
        }
    }

    fn initial_level(&self, extent: DateRange) -> GranularityLevel {
        self.initial_granularity(extent.width_millis())
    }

    fn resolve_level(&self, selection_width_ms: i64, current: GranularityLevel) -> GranularityLevel {
        self.determine_granularity(selection_width_ms, current)
    }

    fn extent_for(&self, level: GranularityLevel, instant: NaiveDateTime) -> DateRange {
        DateRange::new(start_of(level.unit(), instant), end_of(level.unit(), instant))
    }

    fn slider_scale(&self, extent: DateRange, _level: GranularityLevel) -> SliderScale {
        SliderScale::fluid(extent)
    }

    fn zoom_in_plan(&self, context: &ZoomContext) -> Option<ZoomPlan> {
        let selection = context.selection;
        if !context.extent.strictly_contains(selection) || selection.width_millis() <= 0 {
            return None;
        }
        Some(ZoomPlan {
            extent: selection,
            level: self.initial_granularity(selection.width_millis()),
            selection: None,
        })
    }

    fn zoom_out_plan(&self, context: &ZoomContext) -> Option<ZoomPlan> {
        let previous = context.previous?;
        Some(ZoomPlan {
            extent: previous,
            level: self.initial_granularity(previous.width_millis()),
            selection: None,
        })
    }

    fn accommodate(
        &self,
        _value: DateRange,
        extent: DateRange,
        _level: GranularityLevel,
        _bounds: DateRange,
    ) -> DateRange {
        extent
    }

    fn ticks_for(&self, extent: DateRange, level: GranularityLevel) -> Vec<TickMark> {
        self.generate_ticks(extent.start, extent.end, level, extent.start, extent.end)
    }
}
