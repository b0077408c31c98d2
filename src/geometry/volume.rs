use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::PricePoint;
use crate::geometry::index_to_x;

/// Volume-lane bar in pixel coordinates, `(x, y)` at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Largest volume in the slice; samples without volume count as zero.
#[must_use]
pub fn max_volume(slice: &[PricePoint]) -> f64 {
    slice
        .iter()
        .map(|point| OrderedFloat(point.volume_or_zero()))
        .max()
        .map_or(0.0, |value| value.0)
}

/// Projects per-sample volume into bars scaled against the slice maximum.
///
/// A slice whose volumes are all zero produces zero-height bars sitting on
/// the lane baseline rather than dividing by zero.
#[must_use]
pub fn project_volume_bars(
    slice: &[PricePoint],
    width_px: f64,
    lane_height_px: f64,
) -> Vec<VolumeBar> {
    if slice.is_empty() {
        return Vec::new();
    }

    let count = slice.len();
    let max_vol = max_volume(slice);
    let bar_width = (width_px / count as f64 - 1.0).max(1.0);

    slice
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = if max_vol == 0.0 {
                0.0
            } else {
                (point.volume_or_zero() / max_vol) * lane_height_px
            };
            VolumeBar {
                x: index_to_x(i, count, width_px) - bar_width / 2.0,
                y: lane_height_px - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}
