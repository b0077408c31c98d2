use tickview::core::PricePoint;
use tickview::geometry::{PriceBand, PriceBandTuning};

fn ohlc(time: f64, high: f64, low: f64, close: f64) -> PricePoint {
    PricePoint::with_ohlcv(time, None, Some(high), Some(low), close, None).expect("valid sample")
}

#[test]
fn band_fits_the_low_high_envelope_with_padding() {
    let slice = vec![ohlc(1.0, 110.0, 90.0, 100.0), ohlc(2.0, 120.0, 100.0, 115.0)];
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");

    let (min, max) = band.raw_range();
    assert!((min - 90.0).abs() <= 1e-9);
    assert!((max - 120.0).abs() <= 1e-9);
    // 10% of the 30-point range on both sides.
    assert!((band.padded_min() - 87.0).abs() <= 1e-9);
    assert!((band.padded_max() - 123.0).abs() <= 1e-9);
}

#[test]
fn close_only_samples_fall_back_to_close() {
    let slice = vec![
        PricePoint::new(1.0, 50.0).expect("valid sample"),
        PricePoint::new(2.0, 70.0).expect("valid sample"),
    ];
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");

    let (min, max) = band.raw_range();
    assert!((min - 50.0).abs() <= 1e-9);
    assert!((max - 70.0).abs() <= 1e-9);
}

#[test]
fn flat_series_uses_the_fallback_range() {
    let slice: Vec<PricePoint> = (0..5)
        .map(|i| PricePoint::new(i as f64, 100.0).expect("valid sample"))
        .collect();
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");

    // Fallback range 1.0, padding 0.1 on both sides.
    assert!((band.padded_min() - 99.9).abs() <= 1e-9);
    assert!((band.padded_max() - 100.1).abs() <= 1e-9);
    assert!(band.padded_range() > 0.0);
}

#[test]
fn empty_slice_has_no_band() {
    assert!(PriceBand::from_slice(&[], PriceBandTuning::default()).is_none());
}

#[test]
fn price_to_pixel_uses_an_inverted_y_axis() {
    let slice = vec![ohlc(1.0, 120.0, 90.0, 100.0)];
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");

    let top = band.price_to_pixel(band.padded_max(), 150.0);
    let bottom = band.price_to_pixel(band.padded_min(), 150.0);
    let mid = band.price_to_pixel(band.midpoint(), 150.0);

    assert!((top - 0.0).abs() <= 1e-9);
    assert!((bottom - 150.0).abs() <= 1e-9);
    assert!((mid - 75.0).abs() <= 1e-9);
}

#[test]
fn contains_strict_excludes_the_padded_bounds() {
    let slice = vec![ohlc(1.0, 110.0, 90.0, 100.0)];
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");

    assert!(band.contains_strict(100.0));
    assert!(!band.contains_strict(band.padded_min()));
    assert!(!band.contains_strict(band.padded_max()));
    assert!(!band.contains_strict(0.0));
}

#[test]
fn invalid_tuning_values_are_rejected() {
    assert!(
        PriceBandTuning {
            padding_ratio: -0.1,
            flat_range_fallback: 1.0,
        }
        .validate()
        .is_err()
    );
    assert!(
        PriceBandTuning {
            padding_ratio: 0.1,
            flat_range_fallback: 0.0,
        }
        .validate()
        .is_err()
    );
}
