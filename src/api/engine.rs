use tracing::debug;

use crate::core::{StackSnapshot, Viewport, build_stack};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartPlugin};
use crate::interaction::{ChartState, HighlightState, InteractionState};
use crate::render::{LayerKind, Renderer};

use super::{FrameScheduler, StackedAreaConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Interactive stacked-area chart bound to one renderer.
///
/// Construction performs the first full render. Afterwards the host feeds
/// pointer and resize events, calls [`StackedAreaChart::flush_frame`] once per
/// animation frame, and applies data changes through
/// [`StackedAreaChart::update`].
pub struct StackedAreaChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: StackedAreaConfig,
    pub(super) stack: StackSnapshot,
    pub(super) interaction: InteractionState,
    pub(super) scheduler: FrameScheduler,
    pub(super) state: ChartState,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) full_render_count: u64,
}

impl<R: Renderer> StackedAreaChart<R> {
    /// Validates `config`, builds the stack and renders it.
    pub fn new(renderer: R, config: StackedAreaConfig) -> ChartResult<Self> {
        config.validate()?;
        let stack = build_stack(&config.series, &config.styles, config.viewport)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            series_count = stack.series_count(),
            "create stacked area chart"
        );

        let mut chart = Self {
            renderer,
            config,
            stack,
            interaction: InteractionState::default(),
            scheduler: FrameScheduler::default(),
            state: ChartState::Rendered,
            plugins: Vec::new(),
            full_render_count: 0,
        };
        chart.render_full()?;
        Ok(chart)
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn config(&self) -> &StackedAreaConfig {
        &self.config
    }

    #[must_use]
    pub fn stack(&self) -> &StackSnapshot {
        &self.stack
    }

    /// Highlight currently drawn on the surface.
    #[must_use]
    pub fn highlight(&self) -> Option<&HighlightState> {
        self.interaction.highlight()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn full_render_count(&self) -> u64 {
        self.full_render_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Removes every layer and releases the surface.
    ///
    /// Later calls on this chart return [`ChartError::TornDown`].
    pub fn unmount(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        for kind in LayerKind::CANONICAL_ORDER.iter().rev() {
            self.renderer.remove_layer(*kind)?;
        }
        self.renderer.unmount()?;
        self.scheduler.cancel();
        self.interaction.reset();
        self.state = ChartState::TornDown;
        debug!("unmounted stacked area chart");
        self.emit_chart_event(ChartEvent::Unmounted);
        Ok(())
    }

    /// Paints the renderer's live layers into an external cairo context.
    ///
    /// Used by GTK draw callbacks; the chart state is left untouched.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.ensure_live()?;
        self.renderer.render_on_cairo_context(context)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn ensure_live(&self) -> ChartResult<()> {
        if self.state == ChartState::TornDown {
            return Err(ChartError::TornDown);
        }
        Ok(())
    }
}
