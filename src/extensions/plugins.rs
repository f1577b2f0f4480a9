use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::ChartState;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub state: ChartState,
    pub series_count: usize,
    pub points_per_series: usize,
    pub value_extent: (f64, f64),
    pub hovered_series: Option<usize>,
}

/// Lifecycle events exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// A full render finished.
    Rendered,
    DataUpdated {
        series_count: usize,
        points_per_series: usize,
    },
    /// A resize was accepted; the full render follows on the next frame.
    Resized { width: u32, height: u32 },
    HighlightChanged {
        series_index: usize,
        left_section: usize,
        right_section: usize,
    },
    HighlightCleared,
    Unmounted,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe lifecycle events and read chart context without mutating
/// chart internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: PluginContext);
}
