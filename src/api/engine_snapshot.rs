use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DateRange, GranularityLevel, TickMark};

use super::OutputFormat;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub bounds: DateRange,
    pub extent: DateRange,
    pub selection: DateRange,
    pub level: GranularityLevel,
    pub slider_values: [i64; 2],
    pub slider_max: i64,
    pub zoom_history: Vec<DateRange>,
    pub is_zoomed: bool,
    pub disabled: bool,
    pub output_format: OutputFormat,
    pub selection_start_label: String,
    pub selection_end_label: String,
    pub granularity_label: String,
    pub ticks: Vec<TickMark>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}
