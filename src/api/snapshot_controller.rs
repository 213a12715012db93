use crate::core::GranularityEngine;
use crate::error::{SliderError, SliderResult};

use super::{RangeSlider, SliderSnapshot};

impl<E: GranularityEngine> RangeSlider<E> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        let model = &self.core.model;
        let presentation = &self.core.presentation;
        SliderSnapshot {
            bounds: model.bounds,
            extent: model.extent,
            selection: model.selection,
            level: model.level,
            slider_values: model.slider_values,
            slider_max: model.scale.max_position(),
            zoom_history: model.zoom_stack.as_slice().to_vec(),
            is_zoomed: self.is_zoomed(),
            disabled: self.core.runtime.disabled,
            output_format: self.core.runtime.output_format,
            selection_start_label: presentation.selection_start_label.clone(),
            selection_end_label: presentation.selection_end_label.clone(),
            granularity_label: presentation.granularity_label.to_owned(),
            ticks: presentation.ticks.clone(),
            metadata: model.metadata.clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
