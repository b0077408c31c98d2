use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::PriceBand;

/// Locale used for price-axis label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    /// `1,234.56`
    #[default]
    EnUs,
    /// `1.234,56`
    EsEs,
}

impl AxisLabelLocale {
    fn separators(self) -> (char, char) {
        match self {
            Self::EnUs => (',', '.'),
            Self::EsEs => ('.', ','),
        }
    }
}

/// One price-axis tick: the price, its pixel Y and the formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAxisLabel {
    pub price: f64,
    pub y: f64,
    pub text: String,
}

/// The axis always carries exactly three ticks, so the label set lives on
/// the stack.
pub type PriceAxisLabels = SmallVec<[PriceAxisLabel; 3]>;

/// Builds the three price-axis ticks: padded max, midpoint, padded min.
#[must_use]
pub fn build_price_axis_labels(
    band: PriceBand,
    height_px: f64,
    locale: AxisLabelLocale,
) -> PriceAxisLabels {
    [band.padded_max(), band.midpoint(), band.padded_min()]
        .into_iter()
        .map(|price| PriceAxisLabel {
            price,
            y: band.price_to_pixel(price, height_px),
            text: format_price_label(price, locale),
        })
        .collect()
}

/// Formats a price with thousands grouping.
///
/// Integral prices take no decimals, fractional prices two.
#[must_use]
pub fn format_price_label(value: f64, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let (group_sep, decimal_sep) = locale.separators();
    let decimals: usize = if (value - value.round()).abs() < 1e-9 {
        0
    } else {
        2
    };
    let plain = format!("{:.*}", decimals, value.abs());

    let (integer_part, fraction_part) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer_part.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    let digits = integer_part.len();
    for (i, digit) in integer_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction_part {
        grouped.push(decimal_sep);
        grouped.push_str(fraction);
    }
    grouped
}
