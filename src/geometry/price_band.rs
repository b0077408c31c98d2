use serde::{Deserialize, Serialize};

use crate::core::PricePoint;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for the vertical price band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBandTuning {
    /// Headroom added beyond the raw low/high envelope, as a fraction of the
    /// raw range.
    pub padding_ratio: f64,
    /// Substitute range for a flat series, so mapping never divides by zero.
    pub flat_range_fallback: f64,
}

impl Default for PriceBandTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.10,
            flat_range_fallback: 1.0,
        }
    }
}

impl PriceBandTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "price band padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.flat_range_fallback.is_finite() || self.flat_range_fallback <= 0.0 {
            return Err(ChartError::InvalidData(
                "price band flat range fallback must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Padded vertical price interval of the visible slice, mapped to an
/// inverted Y pixel axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    min: f64,
    max: f64,
    padded_min: f64,
    padded_max: f64,
}

impl PriceBand {
    /// Fits the band to a visible slice's low/high envelope.
    ///
    /// Samples without high/low fall back to close. Returns `None` for an
    /// empty slice or one with no finite prices.
    #[must_use]
    pub fn from_slice(slice: &[PricePoint], tuning: PriceBandTuning) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for point in slice {
            let low = point.low_or_close();
            let high = point.high_or_close();
            if !low.is_finite() || !high.is_finite() {
                continue;
            }
            min = min.min(low);
            max = max.max(high);
        }

        if min > max {
            return None;
        }

        let raw_range = max - min;
        let range = if raw_range == 0.0 {
            tuning.flat_range_fallback
        } else {
            raw_range
        };
        let padding = range * tuning.padding_ratio;

        Some(Self {
            min,
            max,
            padded_min: min - padding,
            padded_max: max + padding,
        })
    }

    #[must_use]
    pub fn raw_range(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn padded_min(self) -> f64 {
        self.padded_min
    }

    #[must_use]
    pub fn padded_max(self) -> f64 {
        self.padded_max
    }

    #[must_use]
    pub fn padded_range(self) -> f64 {
        self.padded_max - self.padded_min
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.padded_min + self.padded_max) / 2.0
    }

    /// `true` when `price` lies strictly inside the padded interval.
    #[must_use]
    pub fn contains_strict(self, price: f64) -> bool {
        price > self.padded_min && price < self.padded_max
    }

    /// Maps a price to pixel Y; the padded maximum sits at `y = 0`, the
    /// padded minimum at `y = height_px`.
    #[must_use]
    pub fn price_to_pixel(self, price: f64, height_px: f64) -> f64 {
        height_px - ((price - self.padded_min) / self.padded_range()) * height_px
    }
}
