use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{LayerFrame, LayerKind, Renderer, SurfaceSpec};

/// Headless renderer used by tests and hosts without a drawing backend.
///
/// It validates every frame and retains live layers so callers can inspect
/// exactly what a real backend would be showing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub mount_count: usize,
    pub layer_draw_count: usize,
    pub layer_remove_count: usize,
    pub present_count: usize,
    surface: Option<SurfaceSpec>,
    live: IndexMap<LayerKind, LayerFrame>,
    draws_by_kind: IndexMap<LayerKind, usize>,
}

impl NullRenderer {
    #[must_use]
    pub fn surface(&self) -> Option<&SurfaceSpec> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Live layers in paint order.
    #[must_use]
    pub fn live_layers(&self) -> Vec<LayerKind> {
        self.live.keys().copied().collect()
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&LayerFrame> {
        self.live.get(&kind)
    }

    #[must_use]
    pub fn draws_of(&self, kind: LayerKind) -> usize {
        self.draws_by_kind.get(&kind).copied().unwrap_or(0)
    }
}

impl Renderer for NullRenderer {
    fn mount(&mut self, surface: &SurfaceSpec) -> ChartResult<()> {
        surface.validate()?;
        self.live.clear();
        self.surface = Some(surface.clone());
        self.mount_count += 1;
        Ok(())
    }

    fn draw_layer(&mut self, layer: &LayerFrame) -> ChartResult<()> {
        if self.surface.is_none() {
            return Err(ChartError::Backend(
                "cannot draw a layer before mounting a surface".to_owned(),
            ));
        }
        layer.validate()?;
        self.live.insert(layer.kind, layer.clone());
        self.live.sort_by(|a, _, b, _| a.paint_index().cmp(&b.paint_index()));
        *self.draws_by_kind.entry(layer.kind).or_insert(0) += 1;
        self.layer_draw_count += 1;
        Ok(())
    }

    fn remove_layer(&mut self, kind: LayerKind) -> ChartResult<()> {
        if self.live.shift_remove(&kind).is_some() {
            self.layer_remove_count += 1;
        }
        Ok(())
    }

    fn unmount(&mut self) -> ChartResult<()> {
        self.live.clear();
        self.surface = None;
        Ok(())
    }

    fn present(&mut self) -> ChartResult<()> {
        self.present_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NullRenderer;
    use crate::core::Viewport;
    use crate::render::{LayerFrame, LayerKind, Renderer, SurfaceSpec};

    fn surface() -> SurfaceSpec {
        SurfaceSpec {
            viewport: Viewport::new(100, 50),
            root_class: "chart".to_owned(),
        }
    }

    #[test]
    fn drawing_before_mount_fails() {
        let mut renderer = NullRenderer::default();
        assert!(renderer.draw_layer(&LayerFrame::new(LayerKind::Areas)).is_err());
    }

    #[test]
    fn live_layers_follow_paint_order_and_mount_clears_them() {
        let mut renderer = NullRenderer::default();
        renderer.mount(&surface()).expect("mount");
        renderer
            .draw_layer(&LayerFrame::new(LayerKind::Highlight))
            .expect("highlight");
        renderer
            .draw_layer(&LayerFrame::new(LayerKind::Areas))
            .expect("areas");
        assert_eq!(
            renderer.live_layers(),
            vec![LayerKind::Areas, LayerKind::Highlight]
        );

        renderer.mount(&surface()).expect("remount");
        assert!(renderer.live_layers().is_empty());
        assert_eq!(renderer.mount_count, 2);
    }

    #[test]
    fn removing_absent_layer_is_noop() {
        let mut renderer = NullRenderer::default();
        renderer.mount(&surface()).expect("mount");
        renderer.remove_layer(LayerKind::Highlight).expect("remove");
        assert_eq!(renderer.layer_remove_count, 0);
    }
}
