use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tuning controls for viewport window clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTuning {
    /// Smallest number of samples a zoom or resize may leave visible.
    pub min_visible_count: usize,
}

impl Default for WindowTuning {
    fn default() -> Self {
        Self {
            min_visible_count: 5,
        }
    }
}

impl WindowTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if self.min_visible_count == 0 {
            return Err(ChartError::InvalidData(
                "window minimum visible count must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Effective floor for a concrete series: a series shorter than the
    /// configured minimum is always shown in full.
    #[must_use]
    fn floor_for(self, series_len: usize) -> usize {
        self.min_visible_count.min(series_len)
    }
}

/// The contiguous index window `[start_index, start_index + visible_count)`
/// of the series currently rendered.
///
/// Every operation is total: out-of-range input is clamped, never rejected,
/// so noisy gesture deltas near the boundaries cannot fail mid-interaction.
/// Operations take `self` by value and return the successor state; callers
/// apply them against the gesture-start snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    start_index: usize,
    visible_count: usize,
}

impl ViewWindow {
    /// Full-window view over `series_len` samples, the state after any
    /// series (re)load.
    #[must_use]
    pub fn reset(series_len: usize) -> Self {
        Self {
            start_index: 0,
            visible_count: series_len,
        }
    }

    #[must_use]
    pub fn start_index(self) -> usize {
        self.start_index
    }

    #[must_use]
    pub fn visible_count(self) -> usize {
        self.visible_count
    }

    /// One past the last visible index.
    #[must_use]
    pub fn end_index(self) -> usize {
        self.start_index + self.visible_count
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index()
    }

    /// Re-clamps the window against a series length, preserving as much of
    /// the current extent as possible.
    #[must_use]
    pub fn clamped(self, series_len: usize, tuning: WindowTuning) -> Self {
        if series_len == 0 {
            return Self::reset(0);
        }
        let count = self
            .visible_count
            .max(tuning.floor_for(series_len))
            .min(series_len);
        let start = self.start_index.min(series_len - count);
        Self {
            start_index: start,
            visible_count: count,
        }
    }

    /// Zooms around a focal point.
    ///
    /// `scale_factor < 1` zooms in (computed by callers as
    /// `start_pinch_distance / current_pinch_distance`). `focal_ratio` is the
    /// pinch midpoint's fractional X position within the drawable width; the
    /// data index under it stays visually stationary.
    #[must_use]
    pub fn zoom_at(
        self,
        scale_factor: f64,
        focal_ratio: f64,
        series_len: usize,
        tuning: WindowTuning,
    ) -> Self {
        if series_len == 0 {
            return Self::reset(0);
        }
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return self;
        }
        let focal = if focal_ratio.is_finite() {
            focal_ratio.max(0.0).min(1.0)
        } else {
            0.5
        };

        let floor = tuning.floor_for(series_len) as f64;
        let old_count = self.visible_count as f64;
        let new_count = (old_count * scale_factor)
            .max(floor)
            .min(series_len as f64)
            .round() as usize;

        let max_start = (series_len - new_count) as f64;
        let new_start = (self.start_index as f64 + (old_count - new_count as f64) * focal)
            .max(0.0)
            .min(max_start)
            .round() as usize;

        Self {
            start_index: new_start,
            visible_count: new_count,
        }
    }

    /// Shifts the window by a fractional index delta, extent unchanged.
    #[must_use]
    pub fn pan_by(self, delta_index: f64, series_len: usize) -> Self {
        if series_len == 0 {
            return Self::reset(0);
        }
        if !delta_index.is_finite() {
            return self;
        }

        let max_start = series_len.saturating_sub(self.visible_count) as f64;
        let new_start = (self.start_index as f64 + delta_index)
            .max(0.0)
            .min(max_start)
            .round() as usize;

        Self {
            start_index: new_start,
            visible_count: self.visible_count,
        }
    }

    /// Moves the left boundary, holding the right edge fixed.
    #[must_use]
    pub fn resize_left(self, delta_index: f64, series_len: usize, tuning: WindowTuning) -> Self {
        if series_len == 0 {
            return Self::reset(0);
        }
        if !delta_index.is_finite() {
            return self;
        }

        let end = self.end_index();
        let max_start = end.saturating_sub(tuning.floor_for(series_len)) as f64;
        let new_start = (self.start_index as f64 + delta_index)
            .max(0.0)
            .min(max_start)
            .round() as usize;

        Self {
            start_index: new_start,
            visible_count: end - new_start,
        }
    }

    /// Moves the right boundary, holding the left edge fixed.
    #[must_use]
    pub fn resize_right(self, delta_index: f64, series_len: usize, tuning: WindowTuning) -> Self {
        if series_len == 0 {
            return Self::reset(0);
        }
        if !delta_index.is_finite() {
            return self;
        }

        let max_count = series_len.saturating_sub(self.start_index) as f64;
        let new_count = (self.visible_count as f64 + delta_index)
            .max(tuning.floor_for(series_len) as f64)
            .min(max_count)
            .round() as usize;

        Self {
            start_index: self.start_index,
            visible_count: new_count,
        }
    }

    /// Scrollbar thumb as `(offset_ratio, width_ratio)` of the full series.
    ///
    /// An empty series yields a full idle thumb `(0.0, 1.0)`.
    #[must_use]
    pub fn thumb_extent(self, series_len: usize) -> (f64, f64) {
        if series_len == 0 {
            return (0.0, 1.0);
        }
        let len = series_len as f64;
        (
            self.start_index as f64 / len,
            self.visible_count as f64 / len,
        )
    }
}
