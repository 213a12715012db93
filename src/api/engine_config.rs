use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_TICK_LABELS, DateRange, GranularityLevel};
use crate::error::{SliderError, SliderResult};

/// Shape of values handed to the change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Date,
    Iso,
}

/// Public slider bootstrap configuration.
///
/// Serializable so hosts can persist and reload slider setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSliderConfig {
    pub min_date: NaiveDateTime,
    pub max_date: NaiveDateTime,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Overrides the level picked for a freshly shown full range.
    #[serde(default)]
    pub initial_granularity: Option<GranularityLevel>,
    /// Tick label budget of the snap strategy.
    #[serde(default = "default_max_tick_labels")]
    pub max_tick_labels: usize,
}

impl RangeSliderConfig {
    #[must_use]
    pub fn new(min_date: NaiveDateTime, max_date: NaiveDateTime) -> Self {
        Self {
            min_date,
            max_date,
            disabled: false,
            output_format: OutputFormat::Date,
            initial_granularity: None,
            max_tick_labels: DEFAULT_MAX_TICK_LABELS,
        }
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    #[must_use]
    pub fn with_initial_granularity(mut self, level: GranularityLevel) -> Self {
        self.initial_granularity = Some(level);
        self
    }

    #[must_use]
    pub fn with_max_tick_labels(mut self, max_tick_labels: usize) -> Self {
        self.max_tick_labels = max_tick_labels;
        self
    }

    /// Bound range, rejecting empty or reversed bounds.
    pub fn bounds(&self) -> SliderResult<DateRange> {
        validate_bounds(self.min_date, self.max_date)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse config: {e}")))
    }
}

pub(super) fn validate_bounds(min: NaiveDateTime, max: NaiveDateTime) -> SliderResult<DateRange> {
    if max <= min {
        return Err(SliderError::InvalidBounds { min, max });
    }
    Ok(DateRange { start: min, end: max })
}

fn default_max_tick_labels() -> usize {
    DEFAULT_MAX_TICK_LABELS
}
