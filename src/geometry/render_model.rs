use crate::core::{ChartLayout, PricePoint};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{
    AreaGeometry, AxisLabelLocale, CandleGeometry, PriceAxisLabels, PriceBand, PriceBandTuning,
    VolumeBar, build_price_axis_labels, max_volume, project_area, project_candles,
    project_volume_bars,
};

/// Fully derived, backend-agnostic geometry for one draw pass.
///
/// Recomputed from scratch whenever the visible slice, layout or hold price
/// changes; it is a pure function of its inputs and is never patched in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub layout: ChartLayout,
    pub band: Option<PriceBand>,
    /// Close-price polyline plus its closed fill polygon.
    pub area: AreaGeometry,
    pub candles: Vec<CandleGeometry>,
    pub volume_bars: Vec<VolumeBar>,
    pub max_volume: f64,
    pub axis_labels: PriceAxisLabels,
    pub hold_line_y: Option<f64>,
}

impl RenderModel {
    /// Model that draws nothing, the output for an empty visible slice.
    #[must_use]
    pub fn empty(layout: ChartLayout) -> Self {
        Self {
            layout,
            band: None,
            area: AreaGeometry::empty(),
            candles: Vec::new(),
            volume_bars: Vec::new(),
            max_volume: 0.0,
            axis_labels: PriceAxisLabels::new(),
            hold_line_y: None,
        }
    }

    /// Derives all drawable primitives from the visible slice.
    ///
    /// The hold-price reference line is emitted only when the supplied price
    /// falls strictly inside the padded band; otherwise it is omitted.
    #[must_use]
    pub fn build(
        slice: &[PricePoint],
        layout: ChartLayout,
        hold_price: Option<f64>,
        band_tuning: PriceBandTuning,
        locale: AxisLabelLocale,
    ) -> Self {
        if !layout.is_valid() {
            return Self::empty(layout);
        }
        let Some(band) = PriceBand::from_slice(slice, band_tuning) else {
            return Self::empty(layout);
        };

        let viewport = layout.viewport;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let area = project_area(slice, band, viewport);
        let hold_line_y = hold_price
            .filter(|price| price.is_finite() && band.contains_strict(*price))
            .map(|price| band.price_to_pixel(price, height));

        Self {
            layout,
            band: Some(band),
            area,
            candles: project_candles(slice, band, viewport),
            volume_bars: project_volume_bars(slice, width, f64::from(layout.volume_height)),
            max_volume: max_volume(slice),
            axis_labels: build_price_axis_labels(band, height, locale),
            hold_line_y,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.band.is_none()
    }

    /// Checks every emitted coordinate for finiteness.
    ///
    /// Backends and tests use this as the contract that degenerate input
    /// (flat series, missing OHLC, zero volume) never leaks NaN/∞ geometry.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.layout.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.layout.viewport.width,
                height: self.layout.viewport.height,
            });
        }

        let all_finite = self
            .area
            .line_points
            .iter()
            .chain(self.area.fill_polygon.iter())
            .all(|point| point.x.is_finite() && point.y.is_finite())
            && self.candles.iter().all(|candle| {
                candle.center_x.is_finite()
                    && candle.body_width.is_finite()
                    && candle.wick_top.is_finite()
                    && candle.wick_bottom.is_finite()
                    && candle.body_top.is_finite()
                    && candle.body_height.is_finite()
            })
            && self.volume_bars.iter().all(|bar| {
                bar.x.is_finite() && bar.y.is_finite() && bar.width.is_finite() && bar.height.is_finite()
            })
            && self.axis_labels.iter().all(|label| label.y.is_finite())
            && self.hold_line_y.is_none_or(f64::is_finite)
            && self.max_volume.is_finite();

        if !all_finite {
            return Err(ChartError::InvalidData(
                "render model contains non-finite geometry".to_owned(),
            ));
        }
        Ok(())
    }
}
