use tracing::debug;

use crate::core::{GranularityEngine, ZoomContext};

use super::RangeSlider;

impl<E: GranularityEngine> RangeSlider<E> {
    pub(super) fn zoom_context(&self) -> ZoomContext {
        let model = &self.core.model;
        ZoomContext {
            bounds: model.bounds,
            extent: model.extent,
            selection: model.selection,
            level: model.level,
            previous: model.zoom_stack.peek(),
        }
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        !self.core.runtime.disabled && self.engine.zoom_in_plan(&self.zoom_context()).is_some()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.core.runtime.disabled && self.engine.zoom_out_plan(&self.zoom_context()).is_some()
    }

    /// `true` while the view shows less than the full bound range or zoom
    /// history remains.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        let model = &self.core.model;
        !model.zoom_stack.is_empty() || model.extent != model.bounds
    }

    #[must_use]
    pub fn zoom_depth(&self) -> usize {
        self.core.model.zoom_stack.depth()
    }

    /// Narrows the view to the current selection.
    ///
    /// The previous extent is pushed on the zoom stack unless the new extent
    /// is the full bound range. Both thumbs move to the ends of the new extent. Returns `false` when the engine rejects the
    /// zoom or the slider is disabled.
    pub fn zoom_in(&mut self) -> bool {
        if self.core.runtime.disabled {
            debug!("zoom in ignored: slider is disabled");
            return false;
        }
        let Some(plan) = self.engine.zoom_in_plan(&self.zoom_context()) else {
            debug!(level = %self.core.model.level, "zoom in rejected for current selection");
            return false;
        };

        let previous_level = self.core.model.level;
        let previous_extent = self.core.model.extent;
        if plan.extent != self.core.model.bounds {
            self.core.model.zoom_stack.push(previous_extent);
        }
        self.show_extent(plan.extent, plan.level);
        self.select_full_extent();
        self.refresh_labels();

        debug!(
            start = %plan.extent.start,
            end = %plan.extent.end,
            level = %plan.level,
            depth = self.zoom_depth(),
            "zoomed in"
        );
        self.emit_view_transition(previous_level, true);
        true
    }

    /// Widens the view and reprojects the tracked selection onto it.
    pub fn zoom_out(&mut self) -> bool {
        if self.core.runtime.disabled {
            debug!("zoom out ignored: slider is disabled");
            return false;
        }
        let Some(plan) = self.engine.zoom_out_plan(&self.zoom_context()) else {
            debug!(level = %self.core.model.level, "zoom out rejected");
            return false;
        };

        let previous_level = self.core.model.level;
        let model = &mut self.core.model;
        model.zoom_stack.pop();
        if plan.extent == model.bounds {
            model.zoom_stack.clear();
        }
        if let Some(selection) = plan.selection {
            model.selection = selection;
        }
        self.show_extent(plan.extent, plan.level);
        self.reproject_selection();
        self.refresh_labels();

        debug!(
            start = %plan.extent.start,
            end = %plan.extent.end,
            level = %plan.level,
            depth = self.zoom_depth(),
            "zoomed out"
        );
        self.emit_view_transition(previous_level, true);
        true
    }

    /// Returns to the full bound range, keeping the selection instants.
    ///
    /// No-op when not zoomed.
    pub fn reset_zoom(&mut self) -> bool {
        if self.core.runtime.disabled || !self.is_zoomed() {
            return false;
        }

        let previous_level = self.core.model.level;
        let bounds = self.core.model.bounds;
        self.core.model.zoom_stack.clear();
        let level = self.fresh_level(bounds);
        self.show_extent(bounds, level);
        self.reproject_selection();
        self.refresh_labels();

        debug!(level = %level, "zoom reset to full range");
        self.emit_view_transition(previous_level, true);
        true
    }
}
