//! Observer extensions attached to a running slider.

pub mod plugins;

pub use plugins::{SliderPlugin, SliderPluginContext, SliderPluginEvent};
