use approx::assert_abs_diff_eq;
use tickview::core::{PricePoint, Viewport};
use tickview::geometry::{PriceBand, PriceBandTuning, project_area, project_close_polyline};

fn close(time: f64, close: f64) -> PricePoint {
    PricePoint::new(time, close).expect("valid sample")
}

fn band_for(slice: &[PricePoint]) -> PriceBand {
    PriceBand::from_slice(slice, PriceBandTuning::default()).expect("band")
}

#[test]
fn polyline_spreads_points_edge_to_edge() {
    let slice = vec![close(1.0, 10.0), close(2.0, 20.0), close(3.0, 30.0)];
    let viewport = Viewport::new(300, 150);
    let points = project_close_polyline(&slice, band_for(&slice), viewport);

    assert_eq!(points.len(), 3);
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].x, 300.0, epsilon = 1e-9);
    // Higher closes map to smaller y.
    assert!(points[2].y < points[1].y);
    assert!(points[1].y < points[0].y);
}

#[test]
fn single_sample_maps_to_the_left_edge() {
    let slice = vec![close(1.0, 10.0)];
    let points = project_close_polyline(&slice, band_for(&slice), Viewport::new(300, 150));

    assert_eq!(points.len(), 1);
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-9);
}

#[test]
fn flat_series_produces_a_level_finite_polyline() {
    let slice: Vec<PricePoint> = (0..20).map(|i| close(i as f64, 100.0)).collect();
    let points = project_close_polyline(&slice, band_for(&slice), Viewport::new(300, 150));

    assert_eq!(points.len(), 20);
    for point in &points {
        assert!(point.x.is_finite());
        assert!(point.y.is_finite());
        // All closes are equal, so every y is the lane midpoint.
        assert_abs_diff_eq!(point.y, 75.0, epsilon = 1e-9);
    }
}

#[test]
fn area_polygon_is_explicitly_closed_against_the_baseline() {
    let slice = vec![close(1.0, 10.0), close(2.0, 20.0)];
    let viewport = Viewport::new(300, 150);
    let area = project_area(&slice, band_for(&slice), viewport);

    assert_eq!(area.line_points.len(), 2);
    assert_eq!(area.fill_polygon.len(), 5);

    let first = area.fill_polygon[0];
    let last = area.fill_polygon[area.fill_polygon.len() - 1];
    assert_eq!(first, last);
    assert_abs_diff_eq!(first.y, 150.0, epsilon = 1e-9);

    let closing = area.fill_polygon[area.fill_polygon.len() - 2];
    assert_abs_diff_eq!(closing.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(closing.y, 150.0, epsilon = 1e-9);
}

#[test]
fn empty_slice_projects_empty_geometry() {
    let slice = vec![close(1.0, 10.0)];
    let band = band_for(&slice);

    assert!(project_close_polyline(&[], band, Viewport::new(300, 150)).is_empty());
    let area = project_area(&[], band, Viewport::new(300, 150));
    assert!(area.line_points.is_empty());
    assert!(area.fill_polygon.is_empty());
}
