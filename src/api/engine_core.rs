use indexmap::IndexMap;

use crate::core::{DateRange, GranularityLevel, SliderScale, TickMark, ZoomStack};
use crate::extensions::SliderPlugin;

use super::{OutputFormat, RangeValue};

pub(super) type ChangeCallback = Box<dyn FnMut(&RangeValue)>;
pub(super) type TouchedCallback = Box<dyn FnMut()>;
pub(super) type GranularityCallback = Box<dyn FnMut(GranularityLevel)>;

/// Internal controller state used by the public facade (`RangeSlider`).
pub(super) struct SliderCore {
    pub(super) model: SliderModel,
    pub(super) presentation: SliderPresentation,
    pub(super) runtime: SliderRuntime,
}

/// Extent, selection and zoom history.
///
/// `selection` holds precise instants; `slider_values` are their quantized
/// projection on `scale`.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SliderModel {
    pub(super) bounds: DateRange,
    pub(super) extent: DateRange,
    pub(super) selection: DateRange,
    pub(super) level: GranularityLevel,
    pub(super) scale: SliderScale,
    pub(super) slider_values: [i64; 2],
    pub(super) zoom_stack: ZoomStack,
    pub(super) metadata: IndexMap<String, String>,
}

/// Display fields the host renders verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct SliderPresentation {
    pub(super) selection_start_label: String,
    pub(super) selection_end_label: String,
    pub(super) granularity_label: &'static str,
    pub(super) ticks: Vec<TickMark>,
}

/// Host-facing switches, callbacks and observers.
pub(super) struct SliderRuntime {
    pub(super) disabled: bool,
    pub(super) output_format: OutputFormat,
    pub(super) initial_granularity: Option<GranularityLevel>,
    pub(super) on_change: Option<ChangeCallback>,
    pub(super) on_touched: Option<TouchedCallback>,
    pub(super) on_granularity_change: Option<GranularityCallback>,
    pub(super) plugins: Vec<Box<dyn SliderPlugin>>,
}
