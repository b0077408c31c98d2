use crate::error::ChartResult;
use crate::geometry::RenderModel;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderModel` so
/// drawing code remains isolated from window and interaction logic.
pub trait Renderer {
    fn render(&mut self, model: &RenderModel) -> ChartResult<()>;
}

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates model content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_point_count: usize,
    pub last_candle_count: usize,
    pub last_volume_bar_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, model: &RenderModel) -> ChartResult<()> {
        model.validate()?;
        self.last_line_point_count = model.area.line_points.len();
        self.last_candle_count = model.candles.len();
        self.last_volume_bar_count = model.volume_bars.len();
        self.last_label_count = model.axis_labels.len();
        Ok(())
    }
}
