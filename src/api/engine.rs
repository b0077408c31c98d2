use tracing::{debug, trace};

use crate::core::{ChartLayout, PricePoint, SeriesStore, ViewWindow, visible_slice};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{PriceBand, RenderModel};
use crate::interaction::{
    BoundingRect, CrosshairSnap, GestureMode, GestureRecognizer, PointerMove, ScrollbarHit,
    SurfaceTarget, snap_at_x,
};
use crate::render::Renderer;

use super::EngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// One engine per mounted chart instance: it owns the series store, the
/// viewport window, the gesture recognizer and the hold price, and exposes
/// the derived outputs (render model, tooltip snap, scrollbar thumb).
/// Gesture state is never shared between engines.
pub struct ChartEngine {
    config: EngineConfig,
    store: SeriesStore,
    window: ViewWindow,
    recognizer: GestureRecognizer,
    hold_price: Option<f64>,
}

impl ChartEngine {
    pub fn new(config: EngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            store: SeriesStore::new(),
            window: ViewWindow::reset(0),
            recognizer: GestureRecognizer::new(),
            hold_price: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.store.len()
    }

    /// The currently visible contiguous slice of the merged series.
    #[must_use]
    pub fn visible(&self) -> &[PricePoint] {
        visible_slice(
            self.store.merged(),
            self.window.start_index(),
            self.window.visible_count(),
        )
    }

    /// Loads a new series (symbol or period change) and resets to the
    /// full-window view.
    pub fn set_historical(&mut self, points: Vec<PricePoint>) {
        self.store.replace_historical(points);
        self.window = ViewWindow::reset(self.store.len());
        self.recognizer.end();
        debug!(len = self.store.len(), "series replaced, window reset");
    }

    /// Applies one live tick.
    ///
    /// A window whose right edge sits on the newest bar follows the live
    /// edge so the still-forming bar stays visible; any other window keeps
    /// its extent.
    pub fn push_live(&mut self, point: PricePoint) {
        let was_at_live_edge = self.window.end_index() == self.store.len();
        let grew = self.store.push_live(point);
        if grew && was_at_live_edge {
            self.window =
                self.window
                    .resize_right(1.0, self.store.len(), self.config.window_tuning);
        }
        trace!(
            len = self.store.len(),
            grew, "live sample applied"
        );
    }

    /// Sets or clears the average holding price for the reference line.
    pub fn set_hold_price(&mut self, price: Option<f64>) {
        self.hold_price = price.filter(|value| value.is_finite());
    }

    pub fn set_layout(&mut self, layout: ChartLayout) -> ChartResult<()> {
        if !layout.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: layout.viewport.width,
                height: layout.viewport.height,
            });
        }
        self.config.layout = layout;
        Ok(())
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.recognizer.mode()
    }

    /// Single-pointer-down over the chart surface.
    pub fn pointer_down_chart(&mut self, x: f64) {
        self.recognizer.begin(SurfaceTarget::Chart, x, self.window);
    }

    /// Pointer-down over the scrollbar track.
    ///
    /// Returns `true` when a drag session began; a pointer outside the
    /// thumb does nothing.
    pub fn pointer_down_scrollbar(&mut self, x: f64) -> bool {
        let Some(hit) = self
            .config
            .scrollbar
            .hit_test(x, self.window, self.store.len())
        else {
            return false;
        };
        let target = match hit {
            ScrollbarHit::Body => SurfaceTarget::ScrollbarBody,
            ScrollbarHit::LeftHandle => SurfaceTarget::ScrollbarLeftHandle,
            ScrollbarHit::RightHandle => SurfaceTarget::ScrollbarRightHandle,
        };
        self.recognizer.begin(target, x, self.window);
        true
    }

    /// Two-pointer-down over the chart surface; supersedes any in-flight
    /// single-pointer session.
    pub fn pinch_start(&mut self, distance: f64) {
        self.recognizer.begin_pinch(distance, self.window);
    }

    /// Pointer move for drag-based sessions (scrollbar modes).
    pub fn pointer_move(&mut self, x: f64) {
        if let Some(next) = self.recognizer.update(
            PointerMove::Drag { x },
            self.store.len(),
            self.config.scrollbar.width_px,
            self.config.window_tuning,
        ) {
            self.window = next;
        }
    }

    /// Pinch move: current inter-pointer distance and midpoint X within the
    /// price lane.
    pub fn pinch_move(&mut self, distance: f64, midpoint_x: f64) {
        let width = f64::from(self.config.layout.viewport.width);
        let focal_ratio = midpoint_x / width;
        if let Some(next) = self.recognizer.update(
            PointerMove::Pinch {
                distance,
                focal_ratio,
            },
            self.store.len(),
            self.config.scrollbar.width_px,
            self.config.window_tuning,
        ) {
            self.window = next;
        }
    }

    /// Pointer-up / touch-end: back to idle, session discarded.
    pub fn pointer_up(&mut self) {
        self.recognizer.end();
    }

    /// Derives the drawable geometry for the current visible slice.
    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        RenderModel::build(
            self.visible(),
            self.config.layout,
            self.hold_price,
            self.config.band_tuning,
            self.config.locale,
        )
    }

    /// Pushes the current render model through a backend.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.render_model())
    }

    /// Maps a pointer client X to the tooltip target in the visible slice.
    #[must_use]
    pub fn tooltip_at(&self, client_x: f64, rect: BoundingRect) -> Option<CrosshairSnap> {
        let slice = self.visible();
        let band = PriceBand::from_slice(slice, self.config.band_tuning)?;
        snap_at_x(client_x, rect, slice, band, self.config.layout.viewport)
    }

    /// Scrollbar thumb as `(offset_ratio, width_ratio)` of the series.
    #[must_use]
    pub fn scrollbar_thumb(&self) -> (f64, f64) {
        self.window.thumb_extent(self.store.len())
    }
}
