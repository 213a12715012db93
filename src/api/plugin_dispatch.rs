use tracing::debug;

use crate::core::{GranularityEngine, GranularityLevel};
use crate::extensions::{SliderPluginContext, SliderPluginEvent};

use super::{RangeSlider, RangeValue};

impl<E: GranularityEngine> RangeSlider<E> {
    pub(super) fn plugin_context(&self) -> SliderPluginContext {
        let model = &self.core.model;
        SliderPluginContext {
            bounds: model.bounds,
            extent: model.extent,
            selection: model.selection,
            level: model.level,
            zoom_depth: model.zoom_stack.depth(),
            disabled: self.core.runtime.disabled,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: SliderPluginEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }

    pub(super) fn emit_range_changed(&mut self) {
        let selection = self.core.model.selection;
        let value = RangeValue::from_range(selection, self.core.runtime.output_format);
        if let Some(callback) = self.core.runtime.on_change.as_mut() {
            callback(&value);
        }
        self.emit_plugin_event(SliderPluginEvent::RangeChanged {
            start: selection.start,
            end: selection.end,
        });
    }

    pub(super) fn emit_granularity_changed(
        &mut self,
        previous: GranularityLevel,
        current: GranularityLevel,
    ) {
        debug!(previous = %previous, current = %current, "granularity changed");
        if let Some(callback) = self.core.runtime.on_granularity_change.as_mut() {
            callback(current);
        }
        self.emit_plugin_event(SliderPluginEvent::GranularityChanged { previous, current });
    }

    pub(super) fn emit_extent_changed(&mut self) {
        let extent = self.core.model.extent;
        let zoom_depth = self.core.model.zoom_stack.depth();
        self.emit_plugin_event(SliderPluginEvent::ExtentChanged {
            start: extent.start,
            end: extent.end,
            zoom_depth,
        });
    }

    pub(super) fn emit_touched(&mut self) {
        if let Some(callback) = self.core.runtime.on_touched.as_mut() {
            callback();
        }
        self.emit_plugin_event(SliderPluginEvent::Touched);
    }

    /// Notifies observers after the extent was replaced.
    pub(super) fn emit_view_transition(&mut self, previous_level: GranularityLevel, emit_range: bool) {
        self.emit_extent_changed();
        let current = self.core.model.level;
        if current != previous_level {
            self.emit_granularity_changed(previous_level, current);
        }
        if emit_range {
            self.emit_range_changed();
        }
    }
}
