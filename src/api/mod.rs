mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod presentation_controller;
mod selection_controller;
mod snapshot_controller;
mod value_accessor;
mod zoom_controller;

pub use engine::RangeSlider;
pub use engine_config::{OutputFormat, RangeSliderConfig};
pub use engine_snapshot::SliderSnapshot;
pub use json_contract::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshotJsonContractV1};
pub use value_accessor::{DateRangeIso, ISO_DATE_TIME_FORMAT, RangeValue};
