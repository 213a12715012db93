use crate::core::{AdaptiveGranularity, GranularityEngine, SnapGranularity};
use crate::error::SliderResult;

use super::{RangeSliderConfig, engine_core::SliderCore};

/// Main controller facade consumed by host UI shells.
///
/// `RangeSlider` owns the view extent, the tracked selection, the zoom stack
/// and every derived display field. The plugged `GranularityEngine` decides
/// levels, extents and ticks; the controller applies those decisions.
pub struct RangeSlider<E: GranularityEngine> {
    pub(super) engine: E,
    pub(super) core: SliderCore,
}

impl RangeSlider<AdaptiveGranularity> {
    /// Fluid slider whose level follows the selection width.
    pub fn adaptive(config: RangeSliderConfig) -> SliderResult<Self> {
        Self::new(AdaptiveGranularity::new(), config)
    }
}

impl RangeSlider<SnapGranularity> {
    /// Quantized slider whose level changes only through zooms.
    pub fn snap(config: RangeSliderConfig) -> SliderResult<Self> {
        let engine = SnapGranularity::new().with_max_tick_labels(config.max_tick_labels);
        Self::new(engine, config)
    }
}

impl<E: GranularityEngine> RangeSlider<E> {
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> E {
        self.engine
    }
}
