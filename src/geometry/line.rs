use serde::{Deserialize, Serialize};

use crate::core::{PricePoint, Viewport};
use crate::geometry::{PriceBand, index_to_x};

/// Vertex in pixel coordinates used by line and area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for the gradient-filled line rendition.
///
/// `line_points` follows the mapped close prices.
/// `fill_polygon` is an explicitly closed polygon against the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<LinePoint>,
    pub fill_polygon: Vec<LinePoint>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects close prices into an ordered polyline.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
#[must_use]
pub fn project_close_polyline(
    slice: &[PricePoint],
    band: PriceBand,
    viewport: Viewport,
) -> Vec<LinePoint> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    slice
        .iter()
        .enumerate()
        .map(|(i, point)| LinePoint {
            x: index_to_x(i, slice.len(), width),
            y: band.price_to_pixel(point.close, height),
        })
        .collect()
}

/// Projects close prices into the filled-area rendition.
///
/// Baseline is anchored at the bottom of the price lane; the polygon repeats
/// its first baseline vertex so consumers can render it as closed without
/// implicit closure rules.
#[must_use]
pub fn project_area(slice: &[PricePoint], band: PriceBand, viewport: Viewport) -> AreaGeometry {
    let line_points = project_close_polyline(slice, band, viewport);
    if line_points.is_empty() {
        return AreaGeometry::empty();
    }

    let baseline_y = f64::from(viewport.height);
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(LinePoint {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(LinePoint {
        x: last_x,
        y: baseline_y,
    });
    fill_polygon.push(LinePoint {
        x: first_x,
        y: baseline_y,
    });

    AreaGeometry {
        line_points,
        fill_polygon,
    }
}
