pub mod adaptive;
pub mod calendar;
pub mod extent;
pub mod granularity;
pub mod label_format;
pub mod primitives;
pub mod slider;
pub mod snap;
pub mod ticks;

pub use adaptive::{
    ADAPTIVE_CONFIGS, ADAPTIVE_ORDER, ADAPTIVE_THRESHOLDS, AdaptiveGranularity,
    AdaptiveLevelConfig, ThresholdEntry,
};
pub use calendar::{CalendarUnit, end_of, next_start, snap_to, start_of};
pub use extent::{DateRange, ZoomStack};
pub use granularity::{
    GranularityEngine, GranularityLevel, ZoomContext, ZoomPlan, coarser_level, finer_level,
    level_index,
};
pub use label_format::{format_thumb, format_tick, month_abbreviation};
pub use primitives::{clamp_instant, from_epoch_millis, span_millis, to_epoch_millis};
pub use slider::{SLIDER_MIN_GAP, SLIDER_RESOLUTION, SliderScale, enforce_thumb_gap};
pub use snap::{
    DEFAULT_MAX_INITIAL_STEPS, DEFAULT_MAX_TICK_LABELS, SNAP_CONFIGS, SNAP_ORDER,
    SnapGranularity, SnapLevelConfig,
};
pub use ticks::{TickMark, major_tick_dates, minor_tick_dates};
