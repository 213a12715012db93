use chrono::NaiveDateTime;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::{GranularityEngine, ZoomStack};
use crate::error::{SliderError, SliderResult};

use super::engine_config::validate_bounds;
use super::engine_core::{SliderCore, SliderModel, SliderPresentation, SliderRuntime};
use super::{RangeSlider, RangeSliderConfig};

impl<E: GranularityEngine> RangeSlider<E> {
    /// Creates a fully initialized slider showing the whole bound range.
    pub fn new(engine: E, config: RangeSliderConfig) -> SliderResult<Self> {
        let bounds = config.bounds()?;
        if let Some(level) = config.initial_granularity {
            if !engine.supports(level) {
                return Err(SliderError::UnsupportedLevel { level });
            }
        }

        let level = config
            .initial_granularity
            .unwrap_or_else(|| engine.initial_level(bounds));
        let scale = engine.slider_scale(bounds, level);

        let mut slider = Self {
            engine,
            core: SliderCore {
                model: SliderModel {
                    bounds,
                    extent: bounds,
                    selection: bounds,
                    level,
                    scale,
                    slider_values: [0, scale.max_position()],
                    zoom_stack: ZoomStack::default(),
                    metadata: IndexMap::new(),
                },
                presentation: SliderPresentation::default(),
                runtime: SliderRuntime {
                    disabled: config.disabled,
                    output_format: config.output_format,
                    initial_granularity: config.initial_granularity,
                    on_change: None,
                    on_touched: None,
                    on_granularity_change: None,
                    plugins: Vec::new(),
                },
            },
        };
        slider.show_extent(bounds, level);
        slider.refresh_labels();

        debug!(
            min = %bounds.start,
            max = %bounds.end,
            level = %level,
            "range slider initialized"
        );
        Ok(slider)
    }

    /// Re-initializes the slider for new bounds.
    ///
    /// Clears the zoom history and selects the whole new range. Invalid bounds
    /// leave the current state untouched.
    pub fn set_bounds(&mut self, min: NaiveDateTime, max: NaiveDateTime) -> SliderResult<()> {
        let bounds = validate_bounds(min, max)?;
        let previous_level = self.core.model.level;

        self.core.model.bounds = bounds;
        self.core.model.zoom_stack.clear();
        let level = self.fresh_level(bounds);
        self.show_extent(bounds, level);
        self.select_full_extent();
        self.refresh_labels();

        debug!(
            min = %bounds.start,
            max = %bounds.end,
            level = %level,
            "range slider bounds replaced"
        );
        self.emit_view_transition(previous_level, false);
        Ok(())
    }
}
