use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Vertical split of the draw surface into a price lane and a volume lane.
///
/// `viewport` covers the price lane; volume bars render into a separate band
/// of `volume_height` pixels below it, sharing the same width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub volume_height: u32,
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, volume_height: u32) -> Self {
        Self {
            viewport,
            volume_height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.viewport.is_valid()
    }
}

/// One sample of the chart series.
///
/// `close` is the only mandatory price; OHLC and volume fall back to
/// `close` / `0` when the feed does not supply them (intraday line feeds
/// often carry close-only samples).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
}

impl PricePoint {
    /// Builds a validated close-only sample.
    pub fn new(time: f64, close: f64) -> ChartResult<Self> {
        Self::with_ohlcv(time, None, None, None, close, None)
    }

    /// Builds a validated sample from raw floating values.
    ///
    /// Invariants:
    /// - `time`, `close` and every supplied optional value are finite
    /// - `low <= high` when both are supplied
    pub fn with_ohlcv(
        time: f64,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: f64,
        volume: Option<f64>,
    ) -> ChartResult<Self> {
        if !time.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "sample time and close must be finite".to_owned(),
            ));
        }

        for value in [open, high, low, volume].into_iter().flatten() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "sample ohlcv values must be finite".to_owned(),
                ));
            }
        }

        if let (Some(low), Some(high)) = (low, high) {
            if low > high {
                return Err(ChartError::InvalidData(
                    "sample low must be <= high".to_owned(),
                ));
            }
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated sample.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Option<Decimal>,
        high: Option<Decimal>,
        low: Option<Decimal>,
        close: Decimal,
        volume: Option<Decimal>,
    ) -> ChartResult<Self> {
        Self::with_ohlcv(
            datetime_to_unix_seconds(time),
            open.map(|value| decimal_to_f64(value, "open")).transpose()?,
            high.map(|value| decimal_to_f64(value, "high")).transpose()?,
            low.map(|value| decimal_to_f64(value, "low")).transpose()?,
            decimal_to_f64(close, "close")?,
            volume
                .map(|value| decimal_to_f64(value, "volume"))
                .transpose()?,
        )
    }

    #[must_use]
    pub fn open_or_close(self) -> f64 {
        self.open.unwrap_or(self.close)
    }

    #[must_use]
    pub fn high_or_close(self) -> f64 {
        self.high.unwrap_or(self.close)
    }

    #[must_use]
    pub fn low_or_close(self) -> f64 {
        self.low.unwrap_or(self.close)
    }

    #[must_use]
    pub fn volume_or_zero(self) -> f64 {
        self.volume.unwrap_or(0.0)
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open_or_close()
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
