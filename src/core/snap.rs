//! Snap granularity: discrete levels, quantized slider steps, and zooms
//! that expand the selection to natural unit boundaries.

use chrono::NaiveDateTime;

use super::calendar::{CalendarUnit, end_of, start_of};
use super::extent::DateRange;
use super::granularity::{
    GranularityEngine, GranularityLevel, ZoomContext, ZoomPlan, coarser_level, finer_level,
};
use super::label_format::{
    format_day, format_decade, format_decisecond, format_minute, format_month, format_second,
    format_thumb, format_year,
};
use super::primitives::{offset_millis, span_millis};
use super::slider::SliderScale;
use super::ticks::TickMark;

pub const SNAP_ORDER: [GranularityLevel; 6] = [
    GranularityLevel::Decades,
    GranularityLevel::Years,
    GranularityLevel::Months,
    GranularityLevel::Days,
    GranularityLevel::Minutes,
    GranularityLevel::Deciseconds,
];

pub const DEFAULT_MAX_TICK_LABELS: usize = 7;

/// Initial level is the finest one whose step count over the extent stays
/// within this budget.
pub const DEFAULT_MAX_INITIAL_STEPS: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapLevelConfig {
    pub level: GranularityLevel,
    pub step_ms: i64,
}

impl SnapLevelConfig {
    #[must_use]
    pub fn format_label(&self, instant: NaiveDateTime) -> String {
        match self.level.unit() {
            CalendarUnit::Decade => format_decade(instant),
            CalendarUnit::Year => format_year(instant),
            CalendarUnit::Month => format_month(instant),
            CalendarUnit::Day => format_day(instant),
            CalendarUnit::Hour | CalendarUnit::Minute => format_minute(instant),
            CalendarUnit::Second => format_second(instant),
            CalendarUnit::Decisecond => format_decisecond(instant),
        }
    }

    /// Whole unit of this level containing `instant`.
    #[must_use]
    pub fn natural_extent(&self, instant: NaiveDateTime) -> DateRange {
        let unit = self.level.unit();
        DateRange::new(start_of(unit, instant), end_of(unit, instant))
    }
}

const fn snap_config(level: GranularityLevel) -> SnapLevelConfig {
    SnapLevelConfig {
        level,
        step_ms: level.nominal_millis(),
    }
}

pub static SNAP_CONFIGS: [SnapLevelConfig; 6] = [
    snap_config(GranularityLevel::Decades),
    snap_config(GranularityLevel::Years),
    snap_config(GranularityLevel::Months),
    snap_config(GranularityLevel::Days),
    snap_config(GranularityLevel::Minutes),
    snap_config(GranularityLevel::Deciseconds),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapGranularity {
    max_tick_labels: usize,
    max_initial_steps: i64,
}

impl Default for SnapGranularity {
    fn default() -> Self {
        Self {
            max_tick_labels: DEFAULT_MAX_TICK_LABELS,
            max_initial_steps: DEFAULT_MAX_INITIAL_STEPS,
        }
    }
}

impl SnapGranularity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_tick_labels(mut self, max_tick_labels: usize) -> Self {
        self.max_tick_labels = max_tick_labels.max(1);
        self
    }

    #[must_use]
    pub fn with_max_initial_steps(mut self, max_initial_steps: i64) -> Self {
        self.max_initial_steps = max_initial_steps.max(1);
        self
    }

    #[must_use]
    pub fn max_tick_labels(&self) -> usize {
        self.max_tick_labels
    }

    #[must_use]
    pub fn config(&self, level: GranularityLevel) -> Option<&'static SnapLevelConfig> {
        SNAP_CONFIGS.iter().find(|config| config.level == level)
    }

    fn step_ms(&self, level: GranularityLevel) -> i64 {
        self.config(level)
            .map_or(level.nominal_millis(), |config| config.step_ms)
    }

    /// Adjacent finer level; saturates at the finest level.
    #[must_use]
    pub fn zoom_in(&self, level: GranularityLevel) -> GranularityLevel {
        finer_level(&SNAP_ORDER, level).unwrap_or(level)
    }

    /// Adjacent coarser level; saturates at the coarsest level.
    #[must_use]
    pub fn zoom_out(&self, level: GranularityLevel) -> GranularityLevel {
        coarser_level(&SNAP_ORDER, level).unwrap_or(level)
    }

    #[must_use]
    pub fn can_zoom_in(&self, level: GranularityLevel) -> bool {
        finer_level(&SNAP_ORDER, level).is_some()
    }

    #[must_use]
    pub fn can_zoom_out(&self, level: GranularityLevel) -> bool {
        coarser_level(&SNAP_ORDER, level).is_some()
    }

    #[must_use]
    pub fn natural_extent(&self, level: GranularityLevel, instant: NaiveDateTime) -> DateRange {
        match self.config(level) {
            Some(config) => config.natural_extent(instant),
            None => DateRange::new(start_of(level.unit(), instant), end_of(level.unit(), instant)),
        }
    }

    /// Selection expanded outward to whole units of `new_level`.
    #[must_use]
    pub fn calculate_zoom_in_extent(
        &self,
        selection_start: NaiveDateTime,
        selection_end: NaiveDateTime,
        new_level: GranularityLevel,
    ) -> DateRange {
        DateRange::new(
            self.natural_extent(new_level, selection_start).start,
            self.natural_extent(new_level, selection_end).end,
        )
    }

    /// Selection expanded to whole units of `new_level`, clamped to the bounds.
    #[must_use]
    pub fn calculate_zoom_out_extent(
        &self,
        selection_start: NaiveDateTime,
        selection_end: NaiveDateTime,
        new_level: GranularityLevel,
        min_bound: NaiveDateTime,
        max_bound: NaiveDateTime,
    ) -> DateRange {
        self.calculate_zoom_in_extent(selection_start, selection_end, new_level)
            .clamp_into(DateRange::new(min_bound, max_bound))
    }

    /// A selection can be zoomed only if it spans at least two steps of the
    /// next finer level.
    #[must_use]
    pub fn can_zoom_in_selection(
        &self,
        selection_start: NaiveDateTime,
        selection_end: NaiveDateTime,
        current: GranularityLevel,
    ) -> bool {
        let Some(next) = finer_level(&SNAP_ORDER, current) else {
            return false;
        };
        self.calculate_steps(selection_start, selection_end, next) >= 2
    }

    #[must_use]
    pub fn calculate_steps(
        &self,
        extent_start: NaiveDateTime,
        extent_end: NaiveDateTime,
        level: GranularityLevel,
    ) -> i64 {
        let span = span_millis(extent_start, extent_end) as f64;
        (span / self.step_ms(level) as f64).round() as i64
    }

    #[must_use]
    pub fn date_to_slider_value(
        &self,
        date: NaiveDateTime,
        extent_start: NaiveDateTime,
        level: GranularityLevel,
    ) -> i64 {
        let offset = span_millis(extent_start, date) as f64;
        (offset / self.step_ms(level) as f64).round() as i64
    }

    #[must_use]
    pub fn slider_value_to_date(
        &self,
        value: i64,
        extent_start: NaiveDateTime,
        level: GranularityLevel,
    ) -> NaiveDateTime {
        offset_millis(extent_start, value.saturating_mul(self.step_ms(level)))
    }

    /// Evenly spaced step labels, at most about `max_ticks` of them.
    #[must_use]
    pub fn generate_tick_labels(
        &self,
        extent_start: NaiveDateTime,
        extent_end: NaiveDateTime,
        level: GranularityLevel,
        max_ticks: usize,
    ) -> Vec<TickMark> {
        let total_steps = self.calculate_steps(extent_start, extent_end, level);
        if total_steps <= 0 {
            return Vec::new();
        }
        let max_ticks = i64::try_from(max_ticks.max(1)).unwrap_or(i64::MAX);
        let interval = ((total_steps as f64) / (max_ticks as f64)).ceil().max(1.0) as i64;

        let mut ticks = Vec::new();
        let mut step = 0;
        while step <= total_steps {
            let time = self.slider_value_to_date(step, extent_start, level);
            let label = match self.config(level) {
                Some(config) => config.format_label(time),
                None => format_thumb(level.unit(), time),
            };
            ticks.push(TickMark {
                position: step as f64 / total_steps as f64 * 100.0,
                label,
                major: false,
                major_label: None,
                time,
            });
            step += interval;
        }
        ticks
    }

    /// Finest level whose step count over `extent` fits the initial budget.
    #[must_use]
    pub fn initial_granularity(&self, extent: DateRange) -> GranularityLevel {
        SNAP_ORDER
            .iter()
            .rev()
            .copied()
            .find(|level| {
                self.calculate_steps(extent.start, extent.end, *level) <= self.max_initial_steps
            })
            .unwrap_or(SNAP_ORDER[0])
    }
}

impl GranularityEngine for SnapGranularity {
    fn order(&self) -> &'static [GranularityLevel] {
        &SNAP_ORDER
    }

    fn format_thumb(&self, level: GranularityLevel, instant: NaiveDateTime) -> String {
        match self.config(level) {
            Some(config) => config.format_label(instant),
            None => format_thumb(level.unit(), instant),
        }
    }

    fn initial_level(&self, extent: DateRange) -> GranularityLevel {
        self.initial_granularity(extent)
    }

    fn resolve_level(&self, _selection_width_ms: i64, current: GranularityLevel) -> GranularityLevel {
        // Levels only change through explicit zooms.
        current
    }

    fn extent_for(&self, level: GranularityLevel, instant: NaiveDateTime) -> DateRange {
        self.natural_extent(level, instant)
    }

    fn slider_scale(&self, extent: DateRange, level: GranularityLevel) -> SliderScale {
        SliderScale::quantized(
            extent,
            self.step_ms(level),
            self.calculate_steps(extent.start, extent.end, level),
        )
    }

    fn zoom_in_plan(&self, context: &ZoomContext) -> Option<ZoomPlan> {
        let selection = context.selection;
        if !self.can_zoom_in_selection(selection.start, selection.end, context.level) {
            return None;
        }
        let level = self.zoom_in(context.level);
        let extent = self
            .calculate_zoom_in_extent(selection.start, selection.end, level)
            .clamp_into(context.bounds);
        Some(ZoomPlan {
            extent,
            level,
            selection: None,
        })
    }

    fn zoom_out_plan(&self, context: &ZoomContext) -> Option<ZoomPlan> {
        if !self.can_zoom_out(context.level) {
            return None;
        }
        let level = self.zoom_out(context.level);
        let selection = context.selection;
        let extent = match context.previous {
            Some(previous) => previous,
            // Unzoomed: only the level coarsens, the view stays put.
            None => self
                .calculate_zoom_out_extent(
                    selection.start,
                    selection.end,
                    level,
                    context.bounds.start,
                    context.bounds.end,
                )
                .union(context.extent)
                .clamp_into(context.bounds),
        };
        let selection = self.calculate_zoom_out_extent(
            selection.start,
            selection.end,
            level,
            extent.start,
            extent.end,
        );
        Some(ZoomPlan {
            extent,
            level,
            selection: Some(selection),
        })
    }

    fn accommodate(
        &self,
        value: DateRange,
        extent: DateRange,
        level: GranularityLevel,
        bounds: DateRange,
    ) -> DateRange {
        if extent.start <= value.start && value.end <= extent.end {
            return extent;
        }
        let expanded = self.calculate_zoom_in_extent(value.start, value.end, level);
        extent.union(expanded).clamp_into(bounds)
    }

    fn ticks_for(&self, extent: DateRange, level: GranularityLevel) -> Vec<TickMark> {
        self.generate_tick_labels(extent.start, extent.end, level, self.max_tick_labels)
    }
}
