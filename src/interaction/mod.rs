pub mod crosshair;
pub mod scrollbar;

pub use crosshair::{BoundingRect, CrosshairSnap, snap_at_x};
pub use scrollbar::{ScrollbarHit, ScrollbarTrack};

use serde::{Deserialize, Serialize};

use crate::core::{ViewWindow, WindowTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    Pinch,
    /// Single finger over the chart surface: drives the crosshair, never the
    /// window.
    PanTooltip,
    ScrollWindow,
    ScrollResizeLeft,
    ScrollResizeRight,
}

/// Surface region a pointer-down resolved to, after hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTarget {
    Chart,
    ScrollbarBody,
    ScrollbarLeftHandle,
    ScrollbarRightHandle,
}

/// Per-move input for an active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMove {
    Pinch { distance: f64, focal_ratio: f64 },
    Drag { x: f64 },
}

/// Snapshot taken at gesture start.
///
/// Every move handler derives the next window from this snapshot plus the
/// total delta since the gesture began, so fractional deltas accumulate
/// without drift and no mutable bookkeeping survives between gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    mode: GestureMode,
    start_window: ViewWindow,
    start_x: f64,
    start_pinch_distance: f64,
}

impl GestureSession {
    #[must_use]
    pub fn mode(self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn start_window(self) -> ViewWindow {
        self.start_window
    }

    #[must_use]
    pub fn start_x(self) -> f64 {
        self.start_x
    }

    #[must_use]
    pub fn start_pinch_distance(self) -> f64 {
        self.start_pinch_distance
    }
}

/// Pointer/touch state machine for one mounted chart instance.
///
/// The recognizer never owns the window; it resolves each move against the
/// session snapshot and returns the window the controller should adopt.
/// Moves arriving with no active session are ignored.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    session: Option<GestureSession>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.session.map_or(GestureMode::Idle, GestureSession::mode)
    }

    /// The active session, if any. Hosts tie document-level listener
    /// registration to this value's lifetime.
    #[must_use]
    pub fn session(&self) -> Option<GestureSession> {
        self.session
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Single-pointer-down over a hit-tested surface region.
    pub fn begin(&mut self, target: SurfaceTarget, x: f64, window: ViewWindow) {
        let mode = match target {
            SurfaceTarget::Chart => GestureMode::PanTooltip,
            SurfaceTarget::ScrollbarBody => GestureMode::ScrollWindow,
            SurfaceTarget::ScrollbarLeftHandle => GestureMode::ScrollResizeLeft,
            SurfaceTarget::ScrollbarRightHandle => GestureMode::ScrollResizeRight,
        };
        self.session = Some(GestureSession {
            mode,
            start_window: window,
            start_x: if x.is_finite() { x } else { 0.0 },
            start_pinch_distance: 0.0,
        });
    }

    /// Two-pointer-down over the chart surface.
    ///
    /// Always supersedes an in-flight single-pointer session; a degenerate
    /// initial distance is dropped and leaves the current session alone.
    pub fn begin_pinch(&mut self, distance: f64, window: ViewWindow) {
        if !distance.is_finite() || distance <= 0.0 {
            return;
        }
        self.session = Some(GestureSession {
            mode: GestureMode::Pinch,
            start_window: window,
            start_x: 0.0,
            start_pinch_distance: distance,
        });
    }

    /// Resolves a pointer move into the window the controller should adopt.
    ///
    /// Returns `None` when the move does not mutate the window: no active
    /// session, a tooltip-only pan, or input that does not match the active
    /// mode.
    #[must_use]
    pub fn update(
        &self,
        input: PointerMove,
        series_len: usize,
        track_width_px: f64,
        tuning: WindowTuning,
    ) -> Option<ViewWindow> {
        let session = self.session?;
        match (session.mode, input) {
            (
                GestureMode::Pinch,
                PointerMove::Pinch {
                    distance,
                    focal_ratio,
                },
            ) => {
                if !distance.is_finite() || distance <= 0.0 {
                    return None;
                }
                let scale_factor = session.start_pinch_distance / distance;
                Some(
                    session
                        .start_window
                        .zoom_at(scale_factor, focal_ratio, series_len, tuning),
                )
            }
            (GestureMode::ScrollWindow, PointerMove::Drag { x }) => {
                let delta = drag_delta(session, x, series_len, track_width_px)?;
                Some(session.start_window.pan_by(delta, series_len))
            }
            (GestureMode::ScrollResizeLeft, PointerMove::Drag { x }) => {
                let delta = drag_delta(session, x, series_len, track_width_px)?;
                Some(session.start_window.resize_left(delta, series_len, tuning))
            }
            (GestureMode::ScrollResizeRight, PointerMove::Drag { x }) => {
                let delta = drag_delta(session, x, series_len, track_width_px)?;
                Some(session.start_window.resize_right(delta, series_len, tuning))
            }
            _ => None,
        }
    }

    /// Pointer-up / touch-end / all pointers released.
    ///
    /// Intermediate window states already applied stay applied; only the
    /// session bookkeeping is discarded.
    pub fn end(&mut self) {
        self.session = None;
    }
}

/// Converts a pixel drag into an index delta over the scrollbar track.
fn drag_delta(
    session: GestureSession,
    x: f64,
    series_len: usize,
    track_width_px: f64,
) -> Option<f64> {
    if series_len == 0 || !x.is_finite() || !track_width_px.is_finite() || track_width_px <= 0.0 {
        return None;
    }
    let pixels_per_index = track_width_px / series_len as f64;
    Some((x - session.start_x) / pixels_per_index)
}
