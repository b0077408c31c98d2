use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tickview::core::PricePoint;

#[test]
fn decimal_time_ingestion_converts_to_unix_seconds() {
    let time = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
    let point = PricePoint::from_decimal_time(
        time,
        Some(Decimal::new(10_050, 2)),
        Some(Decimal::new(10_200, 2)),
        Some(Decimal::new(9_900, 2)),
        Decimal::new(10_125, 2),
        Some(Decimal::from(15_000)),
    )
    .expect("valid decimal sample");

    assert!((point.time - time.timestamp() as f64).abs() <= 1e-9);
    assert!((point.close - 101.25).abs() <= 1e-9);
    assert!((point.open_or_close() - 100.50).abs() <= 1e-9);
    assert!((point.high_or_close() - 102.00).abs() <= 1e-9);
    assert!((point.low_or_close() - 99.00).abs() <= 1e-9);
    assert!((point.volume_or_zero() - 15_000.0).abs() <= 1e-9);
}

#[test]
fn close_only_decimal_samples_fall_back_to_close() {
    let time = Utc.with_ymd_and_hms(2024, 5, 17, 9, 31, 0).unwrap();
    let point = PricePoint::from_decimal_time(time, None, None, None, Decimal::from(250), None)
        .expect("valid decimal sample");

    assert!((point.open_or_close() - 250.0).abs() <= 1e-9);
    assert!((point.high_or_close() - 250.0).abs() <= 1e-9);
    assert!((point.low_or_close() - 250.0).abs() <= 1e-9);
    assert!((point.volume_or_zero() - 0.0).abs() <= 1e-9);
    assert!(point.is_bullish());
}

#[test]
fn inverted_low_high_is_rejected() {
    let result = PricePoint::with_ohlcv(1.0, None, Some(90.0), Some(110.0), 100.0, None);
    assert!(result.is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    assert!(PricePoint::new(f64::NAN, 100.0).is_err());
    assert!(PricePoint::new(1.0, f64::INFINITY).is_err());
    assert!(PricePoint::with_ohlcv(1.0, Some(f64::NAN), None, None, 100.0, None).is_err());
}

#[test]
fn bullishness_compares_close_against_open() {
    let up = PricePoint::with_ohlcv(1.0, Some(100.0), None, None, 105.0, None).expect("sample");
    let down = PricePoint::with_ohlcv(2.0, Some(105.0), None, None, 100.0, None).expect("sample");

    assert!(up.is_bullish());
    assert!(!down.is_bullish());
}
