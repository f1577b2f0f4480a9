use tracing::{debug, trace};

use crate::core::{CoordinateSpace, StackSnapshot, build_stack};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::{ChartState, HighlightState};
use crate::render::{LayerKind, Renderer};

use super::{
    FrameOutcome, FrameRequest, SeriesGeometry, StackedAreaChart, StackedAreaConfig,
    build_base_scene, build_highlight_layers, build_series_geometry,
};

impl<R: Renderer> StackedAreaChart<R> {
    /// Animation-frame tick: performs the single pending request, if any.
    ///
    /// Highlight redraws remove the previous overlay and draw the new one
    /// inside this call, so hosts never observe a stale or doubled highlight.
    pub fn flush_frame(&mut self) -> ChartResult<FrameOutcome> {
        self.ensure_live()?;
        let Some(request) = self.scheduler.take() else {
            return Ok(FrameOutcome::Idle);
        };
        trace!(kind = ?request.kind(), "flush frame");

        match request {
            FrameRequest::Full => {
                self.render_full()?;
                Ok(FrameOutcome::FullRender)
            }
            FrameRequest::Highlight(highlight) => {
                let series_index = highlight.series_index;
                self.draw_highlight(highlight)?;
                Ok(FrameOutcome::HighlightDrawn { series_index })
            }
            FrameRequest::ClearHighlight => {
                self.remove_highlight_layers()?;
                self.renderer.present()?;
                if self.interaction.clear_highlight() {
                    self.emit_chart_event(ChartEvent::HighlightCleared);
                }
                self.state = ChartState::Rendered;
                Ok(FrameOutcome::HighlightCleared)
            }
        }
    }

    /// Coordinate space for the live viewport and current stack.
    pub(super) fn coordinate_space(&self) -> ChartResult<CoordinateSpace> {
        self.stack.coordinate_space(self.config.viewport)
    }

    pub(super) fn series_geometry(&self) -> ChartResult<(CoordinateSpace, Vec<SeriesGeometry>)> {
        let space = self.coordinate_space()?;
        let geometry = build_series_geometry(&self.stack, space, self.config.curve)?;
        Ok((space, geometry))
    }

    /// Rebuilds the stack from the current config and redraws everything.
    pub(super) fn render_full(&mut self) -> ChartResult<()> {
        let config = self.config.clone();
        let stack = build_stack(&config.series, &config.styles, config.viewport)?;
        self.render_full_with(config, stack)
    }

    /// Renders `stack` on a fresh surface and commits `config`/`stack` once
    /// the renderer accepted the scene.
    pub(super) fn render_full_with(
        &mut self,
        config: StackedAreaConfig,
        stack: StackSnapshot,
    ) -> ChartResult<()> {
        let space = stack.coordinate_space(config.viewport)?;
        let geometry = build_series_geometry(&stack, space, config.curve)?;
        let scene = build_base_scene(&stack, &geometry, space, &config)?;
        self.renderer.render_scene(&scene)?;

        self.config = config;
        self.stack = stack;
        self.interaction.clear_highlight();
        self.state = ChartState::Rendered;
        self.full_render_count += 1;
        debug!(
            layers = scene.layers.len(),
            width = space.viewport().width,
            height = space.viewport().height,
            "full render"
        );
        self.emit_chart_event(ChartEvent::Rendered);
        Ok(())
    }

    fn draw_highlight(&mut self, highlight: HighlightState) -> ChartResult<()> {
        let (space, geometry) = self.series_geometry()?;
        let (mask, overlay) = build_highlight_layers(&highlight, &geometry, space, &self.config)?;

        self.remove_highlight_layers()?;
        self.renderer.draw_layer(&mask)?;
        self.renderer.draw_layer(&overlay)?;
        self.renderer.present()?;

        let event = ChartEvent::HighlightChanged {
            series_index: highlight.series_index,
            left_section: highlight.left.section_index,
            right_section: highlight.right.section_index,
        };
        self.interaction.set_highlight(highlight);
        self.state = ChartState::Highlighted;
        self.emit_chart_event(event);
        Ok(())
    }

    fn remove_highlight_layers(&mut self) -> ChartResult<()> {
        self.renderer.remove_layer(LayerKind::Highlight)?;
        self.renderer.remove_layer(LayerKind::HighlightMask)
    }
}
