use indexmap::IndexMap;

use crate::core::{DateRange, GranularityEngine, GranularityLevel, SliderScale, TickMark};

use super::RangeSlider;

impl<E: GranularityEngine> RangeSlider<E> {
    /// Attaches host metadata carried into snapshots.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.core.model.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.core.model.metadata
    }

    #[must_use]
    pub fn bounds(&self) -> DateRange {
        self.core.model.bounds
    }

    #[must_use]
    pub fn extent(&self) -> DateRange {
        self.core.model.extent
    }

    #[must_use]
    pub fn selection(&self) -> DateRange {
        self.core.model.selection
    }

    #[must_use]
    pub fn current_level(&self) -> GranularityLevel {
        self.core.model.level
    }

    #[must_use]
    pub fn slider_values(&self) -> [i64; 2] {
        self.core.model.slider_values
    }

    #[must_use]
    pub fn slider_max(&self) -> i64 {
        self.core.model.scale.max_position()
    }

    #[must_use]
    pub fn slider_scale(&self) -> SliderScale {
        self.core.model.scale
    }

    /// Previously active extents, oldest first.
    #[must_use]
    pub fn zoom_history(&self) -> &[DateRange] {
        self.core.model.zoom_stack.as_slice()
    }

    #[must_use]
    pub fn selection_start_label(&self) -> &str {
        &self.core.presentation.selection_start_label
    }

    #[must_use]
    pub fn selection_end_label(&self) -> &str {
        &self.core.presentation.selection_end_label
    }

    #[must_use]
    pub fn granularity_label(&self) -> &str {
        self.core.presentation.granularity_label
    }

    #[must_use]
    pub fn tick_labels(&self) -> &[TickMark] {
        &self.core.presentation.ticks
    }
}
