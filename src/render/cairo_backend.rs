use cairo::{Context, Format, ImageSurface};
use indexmap::IndexMap;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LayerFrame, LayerKind, PathCommand, PathData, Renderer, SurfaceSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub areas_filled: usize,
    pub strokes_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub clipped_areas: usize,
}

/// Optional extension trait for renderers that can paint their live layers into
/// an external Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context) -> ChartResult<()>;
}

/// Cairo renderer backend.
///
/// Live layers are retained. Layer changes only mark the offscreen image
/// surface dirty; it is repainted once per [`Renderer::present`] (or before
/// [`CairoRenderer::write_png`]). Primitives without an inline
/// color fall back to a small per-series palette since Cairo has no notion of
/// CSS classes.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    palette: Vec<Color>,
    highlight_color: Color,
    layers: IndexMap<LayerKind, LayerFrame>,
    mounted: bool,
    dirty: bool,
    repaint_count: u64,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            palette: vec![
                Color::rgb(0.27, 0.51, 0.71),
                Color::rgb(0.99, 0.55, 0.24),
                Color::rgb(0.40, 0.65, 0.12),
                Color::rgb(0.84, 0.15, 0.16),
                Color::rgb(0.58, 0.40, 0.74),
            ],
            highlight_color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            layers: IndexMap::new(),
            mounted: false,
            dirty: false,
            repaint_count: 0,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    /// Offscreen surface as of the last repaint.
    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Colors used for series whose style carries no explicit color.
    pub fn set_palette(&mut self, palette: Vec<Color>) -> ChartResult<()> {
        if palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "cairo palette must not be empty".to_owned(),
            ));
        }
        for color in &palette {
            color.validate()?;
        }
        self.palette = palette;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Offscreen repaints performed so far.
    #[must_use]
    pub fn repaint_count(&self) -> u64 {
        self.repaint_count
    }

    #[must_use]
    pub fn live_layers(&self) -> Vec<LayerKind> {
        self.layers.keys().copied().collect()
    }

    /// Writes the offscreen surface as PNG, repainting pending changes first.
    pub fn write_png<W: std::io::Write>(&mut self, writer: &mut W) -> ChartResult<()> {
        if self.dirty {
            self.repaint_offscreen()?;
        }
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn series_color(&self, series_index: usize) -> Color {
        self.palette[series_index % self.palette.len()]
    }

    fn repaint_offscreen(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_layers(&context)?;
        self.dirty = false;
        self.repaint_count += 1;
        Ok(())
    }

    fn paint_layers(&mut self, context: &Context) -> ChartResult<()> {
        self.clear_color.validate()?;
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let masks: IndexMap<&str, &PathData> = self
            .layers
            .values()
            .flat_map(|layer| layer.clip_masks.iter())
            .map(|mask| (mask.id.as_str(), &mask.path))
            .collect();

        let mut stats = CairoRenderStats::default();
        for (kind, layer) in &self.layers {
            for area in &layer.areas {
                context
                    .save()
                    .map_err(|err| map_backend_error("failed to save context", err))?;
                if let Some(mask) = area.clip_mask_id.as_deref().and_then(|id| masks.get(id)) {
                    append_path(context, mask);
                    context.clip();
                    stats.clipped_areas += 1;
                }
                let fill = area.fill.unwrap_or_else(|| {
                    if kind.is_overlay() {
                        self.highlight_color
                    } else {
                        self.series_color(area.series_index)
                    }
                });
                append_path(context, &area.path);
                apply_color(context, fill);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill area", err))?;
                context
                    .restore()
                    .map_err(|err| map_backend_error("failed to restore context", err))?;
                stats.areas_filled += 1;
            }

            for stroke in &layer.strokes {
                append_path(context, &stroke.path);
                apply_color(
                    context,
                    stroke
                        .color
                        .unwrap_or_else(|| self.series_color(stroke.series_index)),
                );
                context.set_line_width(stroke.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke border", err))?;
                stats.strokes_drawn += 1;
            }

            for line in &layer.lines {
                apply_color(context, Color::rgba(0.0, 0.0, 0.0, 0.3));
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }

            for circle in &layer.circles {
                context.new_sub_path();
                context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
                apply_color(context, circle.color.unwrap_or(Color::rgb(0.0, 0.0, 0.0)));
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill circle", err))?;
                stats.circles_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn mount(&mut self, surface: &SurfaceSpec) -> ChartResult<()> {
        surface.validate()?;
        let width = i32::try_from(surface.viewport.width).map_err(|_| {
            ChartError::InvalidViewport {
                width: surface.viewport.width,
                height: surface.viewport.height,
            }
        })?;
        let height = i32::try_from(surface.viewport.height).map_err(|_| {
            ChartError::InvalidViewport {
                width: surface.viewport.width,
                height: surface.viewport.height,
            }
        })?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        self.layers.clear();
        self.mounted = true;
        self.dirty = true;
        Ok(())
    }

    fn draw_layer(&mut self, layer: &LayerFrame) -> ChartResult<()> {
        if !self.mounted {
            return Err(ChartError::Backend(
                "cairo surface is not mounted".to_owned(),
            ));
        }
        layer.validate()?;
        self.layers.insert(layer.kind, layer.clone());
        self.layers
            .sort_by(|a, _, b, _| a.paint_index().cmp(&b.paint_index()));
        self.dirty = true;
        Ok(())
    }

    fn remove_layer(&mut self, kind: LayerKind) -> ChartResult<()> {
        if self.layers.shift_remove(&kind).is_some() && self.mounted {
            self.dirty = true;
        }
        Ok(())
    }

    fn unmount(&mut self) -> ChartResult<()> {
        self.layers.clear();
        self.mounted = false;
        self.dirty = false;
        Ok(())
    }

    fn present(&mut self) -> ChartResult<()> {
        if self.mounted && self.dirty {
            self.repaint_offscreen()?;
        }
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context) -> ChartResult<()> {
        self.paint_layers(context)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_path(context: &Context, path: &PathData) {
    context.new_path();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
            PathCommand::LineTo(p) => context.line_to(p.x, p.y),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => context.curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
