use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{PricePoint, Viewport};
use crate::geometry::{PriceBand, index_to_x};

/// Smallest rendered body height, so doji bars stay visible.
const MIN_BODY_HEIGHT_PX: f64 = 1.0;

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_width: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub is_bullish: bool,
}

/// Projects the visible slice into deterministic candlestick geometry.
///
/// Missing open/high/low fall back to close, so close-only samples render as
/// doji bars. The function is pure; with the `parallel-projection` feature
/// the per-candle work is parallelized while output order stays stable.
#[must_use]
pub fn project_candles(
    slice: &[PricePoint],
    band: PriceBand,
    viewport: Viewport,
) -> Vec<CandleGeometry> {
    if slice.is_empty() {
        return Vec::new();
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let count = slice.len();
    let body_width = (width / count as f64 - 1.0).max(2.0);

    #[cfg(feature = "parallel-projection")]
    {
        slice
            .par_iter()
            .enumerate()
            .map(|(i, point)| {
                project_single_candle(i, *point, count, body_width, band, width, height)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        slice
            .iter()
            .enumerate()
            .map(|(i, point)| {
                project_single_candle(i, *point, count, body_width, band, width, height)
            })
            .collect()
    }
}

fn project_single_candle(
    index: usize,
    point: PricePoint,
    count: usize,
    body_width: f64,
    band: PriceBand,
    width: f64,
    height: f64,
) -> CandleGeometry {
    let open = point.open_or_close();
    let close = point.close;

    let open_y = band.price_to_pixel(open, height);
    let close_y = band.price_to_pixel(close, height);

    CandleGeometry {
        center_x: index_to_x(index, count, width),
        body_width,
        wick_top: band.price_to_pixel(point.high_or_close(), height),
        wick_bottom: band.price_to_pixel(point.low_or_close(), height),
        body_top: open_y.min(close_y),
        body_height: (close_y - open_y).abs().max(MIN_BODY_HEIGHT_PX),
        is_bullish: point.is_bullish(),
    }
}
