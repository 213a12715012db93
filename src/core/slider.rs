use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::extent::DateRange;
use super::primitives::{offset_millis, span_millis};

/// Track resolution of the fluid (continuous) slider.
pub const SLIDER_RESOLUTION: i64 = 10_000;

/// Minimum distance, in slider positions, kept between the two thumbs.
pub const SLIDER_MIN_GAP: i64 = 1;

/// Mapping between integer thumb positions and instants of a view extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderScale {
    /// Positions are fractions of `resolution` across the extent; any instant
    /// can be represented up to `width / resolution`.
    Fluid { extent: DateRange, resolution: i64 },
    /// Positions are whole steps of `step_ms` from the extent start.
    Quantized {
        extent: DateRange,
        step_ms: i64,
        steps: i64,
    },
}

impl SliderScale {
    #[must_use]
    pub fn fluid(extent: DateRange) -> Self {
        Self::Fluid {
            extent,
            resolution: SLIDER_RESOLUTION,
        }
    }

    /// Quantized scale with at least one step so the two thumbs can separate.
    #[must_use]
    pub fn quantized(extent: DateRange, step_ms: i64, steps: i64) -> Self {
        Self::Quantized {
            extent,
            step_ms: step_ms.max(1),
            steps: steps.max(SLIDER_MIN_GAP),
        }
    }

    #[must_use]
    pub fn extent(self) -> DateRange {
        match self {
            Self::Fluid { extent, .. } | Self::Quantized { extent, .. } => extent,
        }
    }

    #[must_use]
    pub fn max_position(self) -> i64 {
        match self {
            Self::Fluid { resolution, .. } => resolution,
            Self::Quantized { steps, .. } => steps,
        }
    }

    /// Instant represented by `position`, always inside the extent.
    #[must_use]
    pub fn position_to_date(self, position: i64) -> NaiveDateTime {
        let position = position.clamp(0, self.max_position());
        match self {
            Self::Fluid { extent, resolution } => {
                let ratio = position as f64 / resolution as f64;
                let offset = (ratio * extent.width_millis() as f64).round() as i64;
                offset_millis(extent.start, offset)
            }
            Self::Quantized {
                extent,
                step_ms,
                steps,
            } => {
                if position >= steps {
                    return extent.end;
                }
                offset_millis(extent.start, position.saturating_mul(step_ms)).min(extent.end)
            }
        }
    }

    /// Nearest position for `date`, clamped to the track.
    #[must_use]
    pub fn date_to_position(self, date: NaiveDateTime) -> i64 {
        match self {
            Self::Fluid { extent, resolution } => {
                let width = extent.width_millis();
                if width <= 0 {
                    return 0;
                }
                let ratio = span_millis(extent.start, date) as f64 / width as f64;
                (ratio.clamp(0.0, 1.0) * resolution as f64).round() as i64
            }
            Self::Quantized {
                extent,
                step_ms,
                steps,
            } => {
                let offset = span_millis(extent.start, date) as f64;
                ((offset / step_ms as f64).round() as i64).clamp(0, steps)
            }
        }
    }

    /// Position expressed as a percentage of the track.
    #[must_use]
    pub fn position_percent(self, position: i64) -> f64 {
        let max = self.max_position();
        if max <= 0 {
            return 0.0;
        }
        position.clamp(0, max) as f64 / max as f64 * 100.0
    }
}

/// Restores the minimum gap by pushing the thumb that did not move.
///
/// `previous` is the pair before the drag; the thumb whose value changed is
/// treated as the one the user holds.
#[must_use]
pub fn enforce_thumb_gap(values: [i64; 2], previous: [i64; 2], max_position: i64) -> [i64; 2] {
    let gap = SLIDER_MIN_GAP;
    let max_position = max_position.max(gap);
    let [mut start, mut end] = values;

    if end - start < gap {
        if start != previous[0] {
            end = start + gap;
        } else {
            start = end - gap;
        }
    }

    if end > max_position {
        end = max_position;
        start = start.min(max_position - gap);
    }
    if start < 0 {
        start = 0;
        end = end.max(gap);
    }

    [start, end]
}
