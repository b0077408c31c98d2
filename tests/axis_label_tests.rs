use tickview::core::PricePoint;
use tickview::geometry::{
    AxisLabelLocale, PriceBand, PriceBandTuning, build_price_axis_labels, format_price_label,
};

fn band(low: f64, high: f64) -> PriceBand {
    let slice = vec![
        PricePoint::with_ohlcv(1.0, None, Some(high), Some(low), low, None)
            .expect("valid sample"),
    ];
    PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band")
}

#[test]
fn axis_carries_exactly_three_ticks() {
    let band = band(90.0, 110.0);
    let labels = build_price_axis_labels(band, 150.0, AxisLabelLocale::EnUs);

    assert_eq!(labels.len(), 3);
    assert!((labels[0].price - band.padded_max()).abs() <= 1e-9);
    assert!((labels[1].price - band.midpoint()).abs() <= 1e-9);
    assert!((labels[2].price - band.padded_min()).abs() <= 1e-9);
}

#[test]
fn tick_positions_span_the_lane() {
    let labels = build_price_axis_labels(band(90.0, 110.0), 150.0, AxisLabelLocale::EnUs);

    assert!((labels[0].y - 0.0).abs() <= 1e-9);
    assert!((labels[1].y - 75.0).abs() <= 1e-9);
    assert!((labels[2].y - 150.0).abs() <= 1e-9);
}

#[test]
fn en_us_labels_group_thousands_with_commas() {
    assert_eq!(format_price_label(51_300.0, AxisLabelLocale::EnUs), "51,300");
    assert_eq!(
        format_price_label(1_234_567.0, AxisLabelLocale::EnUs),
        "1,234,567"
    );
    assert_eq!(format_price_label(950.0, AxisLabelLocale::EnUs), "950");
}

#[test]
fn es_es_labels_swap_separators() {
    assert_eq!(format_price_label(51_300.0, AxisLabelLocale::EsEs), "51.300");
    assert_eq!(
        format_price_label(1_234.5, AxisLabelLocale::EsEs),
        "1.234,50"
    );
}

#[test]
fn fractional_prices_keep_two_decimals() {
    assert_eq!(format_price_label(99.5, AxisLabelLocale::EnUs), "99.50");
    assert_eq!(format_price_label(100.0, AxisLabelLocale::EnUs), "100");
}

#[test]
fn negative_prices_keep_the_sign_outside_the_grouping() {
    assert_eq!(
        format_price_label(-12_500.0, AxisLabelLocale::EnUs),
        "-12,500"
    );
}

#[test]
fn flat_band_still_produces_three_distinct_ticks() {
    let slice: Vec<PricePoint> = (0..3)
        .map(|i| PricePoint::new(i as f64, 100.0).expect("valid sample"))
        .collect();
    let band = PriceBand::from_slice(&slice, PriceBandTuning::default()).expect("band");
    let labels = build_price_axis_labels(band, 150.0, AxisLabelLocale::EnUs);

    assert_eq!(labels.len(), 3);
    assert!(labels[0].price > labels[1].price);
    assert!(labels[1].price > labels[2].price);
}
