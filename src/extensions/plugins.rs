use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{DateRange, GranularityLevel};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderPluginContext {
    pub bounds: DateRange,
    pub extent: DateRange,
    pub selection: DateRange,
    pub level: GranularityLevel,
    pub zoom_depth: usize,
    pub disabled: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderPluginEvent {
    RangeChanged {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    GranularityChanged {
        previous: GranularityLevel,
        current: GranularityLevel,
    },
    ExtentChanged {
        start: NaiveDateTime,
        end: NaiveDateTime,
        zoom_depth: usize,
    },
    Touched,
}

/// Observer hook for slider state transitions.
///
/// Plugins see events and a read-only context; they cannot mutate the
/// controller.
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderPluginEvent, context: SliderPluginContext);
}
