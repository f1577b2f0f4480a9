use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PixelPoint, StackedPoint};

/// Lifecycle of a chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartState {
    /// Base layers are drawn and no highlight is live.
    Rendered,
    /// Base layers plus a live highlight overlay.
    Highlighted,
    /// Surface released; every further operation fails.
    TornDown,
}

/// Per-area highlight: the section under the cursor plus its curve projections.
///
/// Transient; recomputed on every pointer move and discarded on pointer leave,
/// full re-render or data update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightState {
    pub series_index: usize,
    /// Pointer position in pixel space.
    pub pointer: PixelPoint,
    /// Pointer x in data space.
    pub pointer_x: f64,
    pub left: StackedPoint,
    pub right: StackedPoint,
    /// Point on the rendered top curve at `left.coord.x`.
    pub left_projection: DataPoint,
    /// Point on the rendered top curve at `right.coord.x`.
    pub right_projection: DataPoint,
    pub left_pixel: PixelPoint,
    pub right_pixel: PixelPoint,
    /// Total bisection steps spent on both projections.
    pub solver_steps: usize,
}

impl HighlightState {
    /// Pixel span `[left, right]` covered by the clip mask.
    #[must_use]
    pub fn clip_span(&self) -> (f64, f64) {
        let (a, b) = (self.left_pixel.x, self.right_pixel.x);
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// Pointer tracking plus the currently displayed highlight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<PixelPoint>,
    hovered_series: Option<usize>,
    highlight: Option<HighlightState>,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> Option<PixelPoint> {
        self.cursor
    }

    #[must_use]
    pub fn hovered_series(&self) -> Option<usize> {
        self.hovered_series
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&HighlightState> {
        self.highlight.as_ref()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_series: Option<usize>) {
        self.cursor = Some(PixelPoint::new(x, y));
        self.hovered_series = hovered_series;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered_series = None;
    }

    pub fn set_highlight(&mut self, highlight: HighlightState) {
        self.highlight = Some(highlight);
    }

    /// Drops the displayed highlight, returning whether one was live.
    pub fn clear_highlight(&mut self) -> bool {
        self.highlight.take().is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
