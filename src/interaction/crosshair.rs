use serde::{Deserialize, Serialize};

use crate::core::{PricePoint, Viewport};
use crate::geometry::{PriceBand, index_to_x};

/// Host-reported bounding rectangle of the chart element, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub width: f64,
}

/// Snapped tooltip/crosshair target: the sample under the pointer and its
/// screen position in the price lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairSnap {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub point: PricePoint,
}

/// Maps a pointer client X to the nearest visible sample.
///
/// The Y coordinate uses the padded band of the current visible slice, the
/// same mapping the render model uses, so the crosshair dot sits exactly on
/// the drawn line. Positions at or beyond either edge clamp to the first or
/// last sample; an empty slice hides the tooltip.
#[must_use]
pub fn snap_at_x(
    client_x: f64,
    rect: BoundingRect,
    slice: &[PricePoint],
    band: PriceBand,
    viewport: Viewport,
) -> Option<CrosshairSnap> {
    if slice.is_empty()
        || !viewport.is_valid()
        || !client_x.is_finite()
        || !rect.left.is_finite()
        || !rect.width.is_finite()
        || rect.width <= 0.0
    {
        return None;
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let count = slice.len();

    let svg_x = ((client_x - rect.left) / rect.width) * width;
    let last = (count - 1) as f64;
    let index = ((svg_x / width) * last).round().max(0.0).min(last) as usize;

    let point = slice[index];
    Some(CrosshairSnap {
        index,
        x: index_to_x(index, count, width),
        y: band.price_to_pixel(point.close, height),
        point,
    })
}
