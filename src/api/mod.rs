mod engine;

pub use engine::ChartEngine;

use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Viewport, WindowTuning};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{AxisLabelLocale, PriceBandTuning};
use crate::interaction::ScrollbarTrack;

/// Host-facing engine configuration: draw-surface layout, clamping and
/// padding tunings, label locale and scrollbar track geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub layout: ChartLayout,
    pub window_tuning: WindowTuning,
    pub band_tuning: PriceBandTuning,
    pub locale: AxisLabelLocale,
    pub scrollbar: ScrollbarTrack,
}

impl EngineConfig {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            window_tuning: WindowTuning::default(),
            band_tuning: PriceBandTuning::default(),
            locale: AxisLabelLocale::default(),
            scrollbar: ScrollbarTrack::default(),
        }
    }

    #[must_use]
    pub fn with_window_tuning(mut self, tuning: WindowTuning) -> Self {
        self.window_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_band_tuning(mut self, tuning: PriceBandTuning) -> Self {
        self.band_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_scrollbar(mut self, scrollbar: ScrollbarTrack) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.layout.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.layout.viewport.width,
                height: self.layout.viewport.height,
            });
        }
        self.window_tuning.validate()?;
        self.band_tuning.validate()?;
        self.scrollbar.validate()?;
        Ok(self)
    }

    /// Serializes the configuration for host-side snapshots.
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("config serialization failed: {err}")))
    }

    /// Restores and validates a configuration snapshot.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("config parse failed: {err}")))?;
        config.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Logical units of the original mobile layout: a 300x150 price lane
        // over a 40px volume lane.
        Self::new(ChartLayout::new(Viewport::new(300, 150), 40))
    }
}
