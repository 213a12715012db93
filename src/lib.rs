//! time-range-slider: granularity and extent engine for a dual-thumb date
//! range slider.
//!
//! The crate keeps a strict split between pure calendar/granularity math
//! (`core`) and the stateful controller facade (`api`) that a UI shell drives
//! with raw slider values and zoom intents.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{OutputFormat, RangeSlider, RangeSliderConfig, RangeValue};
pub use error::{SliderError, SliderResult};
