use chrono::NaiveDateTime;
use thiserror::Error;

use crate::core::GranularityLevel;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid bounds: min={min}, max={max} (max must be after min)")]
    InvalidBounds {
        min: NaiveDateTime,
        max: NaiveDateTime,
    },

    #[error("granularity level `{level}` is not supported by this engine")]
    UnsupportedLevel { level: GranularityLevel },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
