mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{LayerFrame, SurfaceSpec};
pub use layer_stack::LayerKind;
pub use layered_frame::SceneFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AreaPrimitive, CirclePrimitive, ClipMaskPrimitive, Color, LinePrimitive, PathCommand,
    PathData, StrokePrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends keep a retained set of named layers on one drawing surface and
/// receive fully materialized, deterministic layer frames, so drawing code
/// stays isolated from stacking, scaling and interaction logic.
pub trait Renderer {
    /// Discards the previous surface with all its layers and creates a fresh one.
    fn mount(&mut self, surface: &SurfaceSpec) -> ChartResult<()>;

    /// Draws `layer`, first discarding any live layer of the same kind.
    fn draw_layer(&mut self, layer: &LayerFrame) -> ChartResult<()>;

    /// Removes the live layer of `kind`; removing an absent layer is a no-op.
    fn remove_layer(&mut self, kind: LayerKind) -> ChartResult<()>;

    /// Releases the surface.
    fn unmount(&mut self) -> ChartResult<()>;

    /// Ends a batch of layer changes. Backends that composite eagerly can
    /// defer that work until this call.
    fn present(&mut self) -> ChartResult<()> {
        Ok(())
    }

    /// Mounts a fresh surface, draws every layer of `scene` in order and
    /// presents the result.
    fn render_scene(&mut self, scene: &SceneFrame) -> ChartResult<()> {
        self.mount(&scene.surface)?;
        for layer in &scene.layers {
            self.draw_layer(layer)?;
        }
        self.present()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
