use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DateRange, GranularityEngine, GranularityLevel};
use crate::error::{SliderError, SliderResult};

use super::{OutputFormat, RangeSlider};

/// Zone-less ISO-8601 layout with millisecond precision.
pub const ISO_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeIso {
    pub start: String,
    pub end: String,
}

impl DateRangeIso {
    #[must_use]
    pub fn from_range(range: DateRange) -> Self {
        Self {
            start: range.start.format(ISO_DATE_TIME_FORMAT).to_string(),
            end: range.end.format(ISO_DATE_TIME_FORMAT).to_string(),
        }
    }

    pub fn to_range(&self) -> SliderResult<DateRange> {
        Ok(DateRange {
            start: parse_iso(&self.start)?,
            end: parse_iso(&self.end)?,
        })
    }
}

fn parse_iso(input: &str) -> SliderResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, ISO_DATE_TIME_FORMAT)
        .map_err(|e| SliderError::InvalidData(format!("invalid iso date-time `{input}`: {e}")))
}

/// Selection as handed to the host, shaped by the configured output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeValue {
    Dates(DateRange),
    Iso(DateRangeIso),
}

impl RangeValue {
    #[must_use]
    pub fn from_range(range: DateRange, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Date => Self::Dates(range),
            OutputFormat::Iso => Self::Iso(DateRangeIso::from_range(range)),
        }
    }

    pub fn to_range(&self) -> SliderResult<DateRange> {
        match self {
            Self::Dates(range) => Ok(*range),
            Self::Iso(iso) => iso.to_range(),
        }
    }
}

impl<E: GranularityEngine> RangeSlider<E> {
    pub fn register_on_change(&mut self, callback: impl FnMut(&RangeValue) + 'static) {
        self.core.runtime.on_change = Some(Box::new(callback));
    }

    pub fn register_on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.core.runtime.on_touched = Some(Box::new(callback));
    }

    pub fn register_on_granularity_change(
        &mut self,
        callback: impl FnMut(GranularityLevel) + 'static,
    ) {
        self.core.runtime.on_granularity_change = Some(Box::new(callback));
    }

    /// Disabling blocks drags and zooms; host writes still apply.
    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.core.runtime.disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.core.runtime.disabled
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.core.runtime.output_format
    }

    pub fn set_output_format(&mut self, output_format: OutputFormat) {
        self.core.runtime.output_format = output_format;
    }

    #[must_use]
    pub fn current_value(&self) -> RangeValue {
        RangeValue::from_range(self.core.model.selection, self.core.runtime.output_format)
    }

    /// Writes a selection from the host side without emitting a change.
    ///
    /// The engine decides whether the extent grows to contain the value; the
    /// value is then clamped into the extent. `None`, reversed ranges and
    /// ranges entirely outside the bounds are ignored and return `false`.
    pub fn write_value(&mut self, value: Option<DateRange>) -> bool {
        let Some(value) = value else {
            warn!("write_value ignored: empty value");
            return false;
        };
        let model = &self.core.model;
        if value.end < value.start {
            warn!(start = %value.start, end = %value.end, "write_value ignored: reversed range");
            return false;
        }
        if !value.overlaps(model.bounds) {
            warn!(
                start = %value.start,
                end = %value.end,
                "write_value ignored: range outside slider bounds"
            );
            return false;
        }

        let extent = self
            .engine
            .accommodate(value, model.extent, model.level, model.bounds);
        let extent_changed = extent != model.extent;
        if extent_changed {
            let level = model.level;
            self.show_extent(extent, level);
            if extent == self.core.model.bounds {
                self.core.model.zoom_stack.clear();
            }
            debug!(start = %extent.start, end = %extent.end, "extent expanded for written value");
        }

        self.core.model.selection = value.clamp_into(extent);
        self.reproject_selection();
        self.refresh_labels();

        if extent_changed {
            self.emit_extent_changed();
        }
        true
    }
}
