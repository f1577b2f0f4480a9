use crate::extensions::{ChartEvent, PluginContext};
use crate::render::Renderer;

use super::StackedAreaChart;

impl<R: Renderer> StackedAreaChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let extent = self.stack.extent();
        PluginContext {
            viewport: self.config.viewport,
            state: self.state,
            series_count: self.stack.series_count(),
            points_per_series: self.stack.points_per_series(),
            value_extent: (extent.min, extent.max),
            hovered_series: self.interaction.hovered_series(),
        }
    }

    pub(super) fn emit_chart_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
