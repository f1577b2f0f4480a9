use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{LayerPixels, StackedPoint, Viewport};
use crate::interaction::{ChartState, HighlightState};

use super::FrameRequestKind;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub state: ChartState,
    pub section_count: usize,
    pub value_extent: (f64, f64),
    pub layers: Vec<Vec<StackedPoint>>,
    pub projected: Vec<LayerPixels>,
    /// Extra CSS class per styled series, keyed by series index.
    #[serde(default)]
    pub series_classes: IndexMap<usize, String>,
    #[serde(default)]
    pub highlight: Option<HighlightState>,
    #[serde(default)]
    pub pending_frame: Option<FrameRequestKind>,
    pub full_render_count: u64,
}
