use tracing::{debug, trace};

use crate::core::{DateRange, GranularityEngine, enforce_thumb_gap};

use super::RangeSlider;

impl<E: GranularityEngine> RangeSlider<E> {
    /// Applies raw thumb positions from a drag.
    ///
    /// Positions closer than the minimum gap are corrected by pushing the thumb
    /// that did not move. The selection instants follow the corrected
    /// positions, the level is re-resolved, and the range plus a touched
    /// notification are emitted. Returns `false` while disabled.
    pub fn on_slider_change(&mut self, values: [i64; 2]) -> bool {
        if self.core.runtime.disabled {
            trace!(?values, "slider change ignored: slider is disabled");
            return false;
        }

        let model = &mut self.core.model;
        let corrected = enforce_thumb_gap(values, model.slider_values, model.scale.max_position());
        model.slider_values = corrected;
        model.selection = DateRange::new(
            model.scale.position_to_date(corrected[0]),
            model.scale.position_to_date(corrected[1]),
        );

        let previous_level = model.level;
        let resolved = self
            .engine
            .resolve_level(model.selection.width_millis(), previous_level);
        if resolved != previous_level {
            model.level = resolved;
            let scale = self.engine.slider_scale(model.extent, resolved);
            if scale != model.scale {
                model.scale = scale;
                self.reproject_selection();
            }
        }
        self.refresh_labels();

        trace!(
            start = corrected[0],
            end = corrected[1],
            level = %self.core.model.level,
            "slider values applied"
        );

        if resolved != previous_level {
            debug!(
                width_ms = self.core.model.selection.width_millis(),
                "selection width crossed a granularity threshold"
            );
            self.emit_granularity_changed(previous_level, resolved);
        }
        self.emit_range_changed();
        self.emit_touched();
        true
    }

    /// Thumb position of the selection start as a percentage of the track.
    #[must_use]
    pub fn start_thumb_position(&self) -> f64 {
        let model = &self.core.model;
        model.scale.position_percent(model.slider_values[0])
    }

    #[must_use]
    pub fn end_thumb_position(&self) -> f64 {
        let model = &self.core.model;
        model.scale.position_percent(model.slider_values[1])
    }
}
