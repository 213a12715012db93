use crate::core::{DateRange, GranularityEngine, GranularityLevel, enforce_thumb_gap};

use super::RangeSlider;

impl<E: GranularityEngine> RangeSlider<E> {
    /// Level shown for a full, freshly initialized or reset range.
    pub(super) fn fresh_level(&self, extent: DateRange) -> GranularityLevel {
        self.core
            .runtime
            .initial_granularity
            .filter(|level| self.engine.supports(*level))
            .unwrap_or_else(|| self.engine.initial_level(extent))
    }

    /// Replaces the view extent and level, rebuilding the scale and ticks.
    ///
    /// The tracked selection is left alone; callers reproject it.
    pub(super) fn show_extent(&mut self, extent: DateRange, level: GranularityLevel) {
        let model = &mut self.core.model;
        model.extent = extent;
        model.level = level;
        model.scale = self.engine.slider_scale(extent, level);
        self.core.presentation.granularity_label = self.engine.label(level);
        self.refresh_ticks();
    }

    /// Selects the whole extent with thumbs at both track ends.
    pub(super) fn select_full_extent(&mut self) {
        let model = &mut self.core.model;
        model.selection = model.extent;
        model.slider_values = [0, model.scale.max_position()];
    }

    /// Recomputes thumb positions from the tracked selection instants.
    pub(super) fn reproject_selection(&mut self) {
        let model = &mut self.core.model;
        model.selection = model.selection.clamp_into(model.extent);
        let positions = [
            model.scale.date_to_position(model.selection.start),
            model.scale.date_to_position(model.selection.end),
        ];
        model.slider_values = enforce_thumb_gap(positions, positions, model.scale.max_position());
    }

    pub(super) fn refresh_labels(&mut self) {
        let model = &self.core.model;
        let presentation = &mut self.core.presentation;
        presentation.selection_start_label =
            self.engine.format_thumb(model.level, model.selection.start);
        presentation.selection_end_label = self.engine.format_thumb(model.level, model.selection.end);
        presentation.granularity_label = self.engine.label(model.level);
    }

    pub(super) fn refresh_ticks(&mut self) {
        let model = &self.core.model;
        self.core.presentation.ticks = self.engine.ticks_for(model.extent, model.level);
    }
}
