use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartSnapshot, StackedAreaChart};

impl<R: Renderer> StackedAreaChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        self.ensure_live()?;
        let space = self.coordinate_space()?;
        let extent = self.stack.extent();
        let series_classes: IndexMap<usize, String> = self
            .stack
            .layers()
            .iter()
            .enumerate()
            .filter_map(|(series_index, layer)| {
                layer
                    .first()
                    .and_then(|point| point.style.as_ref())
                    .and_then(|style| style.class_name.clone())
                    .map(|class_name| (series_index, class_name))
            })
            .collect();

        Ok(ChartSnapshot {
            viewport: self.config.viewport,
            state: self.state,
            section_count: self.stack.section_count(),
            value_extent: (extent.min, extent.max),
            layers: self.stack.layers().to_vec(),
            projected: self.stack.project(space)?,
            series_classes,
            highlight: self.interaction.highlight().cloned(),
            pending_frame: self.scheduler.pending_kind(),
            full_render_count: self.full_render_count,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
