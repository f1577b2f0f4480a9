use tracing::trace;

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{FrameRequest, StackedAreaChart, hit_test_series, resolve_highlight};

impl<R: Renderer> StackedAreaChart<R> {
    /// Handles pointer motion in surface pixels.
    ///
    /// The hovered series is found by hit-testing the rendered bands. Over a
    /// band, a highlight redraw is scheduled; elsewhere a highlight removal.
    /// Returns the hovered series.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        self.ensure_live()?;
        let pointer = validated_pointer(x, y)?;
        let (space, geometry) = self.series_geometry()?;
        let hovered = hit_test_series(&geometry, space, pointer)?;
        self.interaction.on_pointer_move(x, y, hovered);

        match hovered {
            Some(series_index) => {
                let highlight =
                    resolve_highlight(&self.stack, &geometry, space, series_index, pointer)?;
                trace!(series_index, x, y, "schedule highlight");
                self.scheduler.request(FrameRequest::Highlight(highlight));
            }
            None => {
                trace!(x, y, "pointer outside every area");
                self.scheduler.request(FrameRequest::ClearHighlight);
            }
        }
        Ok(hovered)
    }

    /// Handles motion over a series the host already hit-tested.
    pub fn pointer_move_over(&mut self, series_index: usize, x: f64, y: f64) -> ChartResult<()> {
        self.ensure_live()?;
        let pointer = validated_pointer(x, y)?;
        let (space, geometry) = self.series_geometry()?;
        let highlight = resolve_highlight(&self.stack, &geometry, space, series_index, pointer)?;
        self.interaction.on_pointer_move(x, y, Some(series_index));
        trace!(series_index, x, y, "schedule highlight");
        self.scheduler.request(FrameRequest::Highlight(highlight));
        Ok(())
    }

    /// Pointer entered the surface; same as a move.
    pub fn pointer_enter(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        self.pointer_move(x, y)
    }

    /// Pointer left the surface; the highlight is removed on the next frame.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        self.interaction.on_pointer_leave();
        trace!("schedule highlight removal");
        self.scheduler.request(FrameRequest::ClearHighlight);
        Ok(())
    }
}

fn validated_pointer(x: f64, y: f64) -> ChartResult<PixelPoint> {
    let pointer = PixelPoint::new(x, y);
    if !pointer.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(pointer)
}
