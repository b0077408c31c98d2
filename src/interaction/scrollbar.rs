use serde::{Deserialize, Serialize};

use crate::core::ViewWindow;
use crate::error::{ChartError, ChartResult};

/// Region of the scrollbar thumb a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollbarHit {
    Body,
    LeftHandle,
    RightHandle,
}

/// Range-selector track geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarTrack {
    pub width_px: f64,
    /// Width of each resize handle, nested inside the thumb's ends.
    pub handle_width_px: f64,
}

impl Default for ScrollbarTrack {
    fn default() -> Self {
        Self {
            width_px: 300.0,
            handle_width_px: 12.0,
        }
    }
}

impl ScrollbarTrack {
    pub fn new(width_px: f64, handle_width_px: f64) -> ChartResult<Self> {
        Self {
            width_px,
            handle_width_px,
        }
        .validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scrollbar track width must be finite and > 0".to_owned(),
            ));
        }
        if !self.handle_width_px.is_finite() || self.handle_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "scrollbar handle width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Thumb extent as `(left_px, width_px)` on this track.
    #[must_use]
    pub fn thumb_pixels(self, window: ViewWindow, series_len: usize) -> (f64, f64) {
        let (offset_ratio, width_ratio) = window.thumb_extent(series_len);
        (offset_ratio * self.width_px, width_ratio * self.width_px)
    }

    /// Resolves a pointer X on the track to a thumb region.
    ///
    /// Handle regions take priority over the thumb body; on a thumb too
    /// narrow to hold both handles the split point is the thumb center.
    /// Pointer positions outside the thumb resolve to `None`; the track
    /// itself is not a drag target.
    #[must_use]
    pub fn hit_test(self, x: f64, window: ViewWindow, series_len: usize) -> Option<ScrollbarHit> {
        if !x.is_finite() {
            return None;
        }

        let (left, width) = self.thumb_pixels(window, series_len);
        let right = left + width;
        if x < left || x > right {
            return None;
        }

        let handle = self.handle_width_px.min(width / 2.0);
        if x <= left + handle {
            Some(ScrollbarHit::LeftHandle)
        } else if x >= right - handle {
            Some(ScrollbarHit::RightHandle)
        } else {
            Some(ScrollbarHit::Body)
        }
    }
}
