use tracing::{debug, trace};

use crate::core::{Viewport, build_stack};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::{ChartUpdate, FrameRequest, StackedAreaChart};

impl<R: Renderer> StackedAreaChart<R> {
    /// Merges `update` over the current data and re-renders immediately.
    ///
    /// Omitted fields keep their current values. On error the chart keeps
    /// its previous data, stack and rendered layers.
    pub fn update(&mut self, update: ChartUpdate) -> ChartResult<()> {
        self.ensure_live()?;
        let next = update.merged_over(&self.config);
        next.validate()?;
        let stack = build_stack(&next.series, &next.styles, next.viewport)?;
        debug!(
            series_replaced = update.series.is_some(),
            styles_replaced = update.styles.is_some(),
            series_count = stack.series_count(),
            points_per_series = stack.points_per_series(),
            "update chart data"
        );

        self.render_full_with(next, stack)?;
        // Anything still queued was computed against the old data.
        self.scheduler.cancel();
        self.emit_chart_event(ChartEvent::DataUpdated {
            series_count: self.stack.series_count(),
            points_per_series: self.stack.points_per_series(),
        });
        Ok(())
    }

    /// Records a new viewport; the chart is redrawn on the next frame.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.ensure_live()?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        trace!(
            width = viewport.width,
            height = viewport.height,
            "resize requested"
        );
        self.config.viewport = viewport;
        self.scheduler.request(FrameRequest::Full);
        self.emit_chart_event(ChartEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }
}
