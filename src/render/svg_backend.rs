use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{LayerFrame, LayerKind, Renderer, SurfaceSpec};

#[derive(Debug, Clone, Default)]
struct SvgLayer {
    defs: String,
    body: String,
}

/// Retained-mode SVG backend.
///
/// Each live layer becomes one `<g data-layer="...">` group; clip masks are
/// emitted into `<defs>`. Styling is left to CSS through the class names
/// carried by every primitive, with inline colors only where a series style
/// provides one.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    surface: Option<SurfaceSpec>,
    layers: IndexMap<LayerKind, SvgLayer>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn live_layers(&self) -> Vec<LayerKind> {
        self.layers.keys().copied().collect()
    }

    /// Serializes the current surface as a standalone SVG document.
    pub fn document(&self) -> ChartResult<String> {
        let surface = self.surface.as_ref().ok_or_else(|| {
            ChartError::Backend("svg surface is not mounted".to_owned())
        })?;
        let width = surface.viewport.width;
        let height = surface.viewport.height;

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
            escape_attr(&surface.root_class)
        )
        .map_err(fmt_error)?;

        let defs: String = self.layers.values().map(|layer| layer.defs.as_str()).collect();
        if !defs.is_empty() {
            writeln!(out, "<defs>\n{defs}</defs>").map_err(fmt_error)?;
        }
        for (kind, layer) in &self.layers {
            writeln!(out, r#"<g data-layer="{}">"#, kind.name()).map_err(fmt_error)?;
            out.push_str(&layer.body);
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        Ok(out)
    }

    fn render_layer(layer: &LayerFrame) -> ChartResult<SvgLayer> {
        let mut rendered = SvgLayer::default();
        let defs = &mut rendered.defs;
        for mask in &layer.clip_masks {
            writeln!(
                defs,
                r#"<clipPath id="{}"><path d="{}"/></clipPath>"#,
                escape_attr(&mask.id),
                mask.path.to_svg_d()
            )
            .map_err(fmt_error)?;
        }

        let body = &mut rendered.body;
        for area in &layer.areas {
            write!(
                body,
                r#"<path class="{}" data-series="{}" d="{}""#,
                escape_attr(&area.class),
                area.series_index,
                area.path.to_svg_d()
            )
            .map_err(fmt_error)?;
            if let Some(fill) = area.fill {
                write!(body, r#" fill="{}""#, fill.to_css()).map_err(fmt_error)?;
            }
            if let Some(mask_id) = &area.clip_mask_id {
                write!(body, r#" clip-path="url(#{})""#, escape_attr(mask_id))
                    .map_err(fmt_error)?;
            }
            body.push_str("/>\n");
        }
        for stroke in &layer.strokes {
            write!(
                body,
                r#"<path class="{}" data-series="{}" d="{}" fill="none" stroke-width="{}""#,
                escape_attr(&stroke.class),
                stroke.series_index,
                stroke.path.to_svg_d(),
                stroke.stroke_width
            )
            .map_err(fmt_error)?;
            if let Some(color) = stroke.color {
                write!(body, r#" stroke="{}""#, color.to_css()).map_err(fmt_error)?;
            }
            body.push_str("/>\n");
        }
        for line in &layer.lines {
            writeln!(
                body,
                r#"<line class="{}" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke-width="{}"/>"#,
                escape_attr(&line.class),
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.stroke_width
            )
            .map_err(fmt_error)?;
        }
        for circle in &layer.circles {
            write!(
                body,
                r#"<circle class="{}" cx="{:.3}" cy="{:.3}" r="{}""#,
                escape_attr(&circle.class),
                circle.center.x,
                circle.center.y,
                circle.radius
            )
            .map_err(fmt_error)?;
            if let Some(color) = circle.color {
                write!(body, r#" fill="{}""#, color.to_css()).map_err(fmt_error)?;
            }
            body.push_str("/>\n");
        }
        Ok(rendered)
    }
}

impl Renderer for SvgRenderer {
    fn mount(&mut self, surface: &SurfaceSpec) -> ChartResult<()> {
        surface.validate()?;
        self.layers.clear();
        self.surface = Some(surface.clone());
        Ok(())
    }

    fn draw_layer(&mut self, layer: &LayerFrame) -> ChartResult<()> {
        if self.surface.is_none() {
            return Err(ChartError::Backend(
                "svg surface is not mounted".to_owned(),
            ));
        }
        layer.validate()?;
        let rendered = Self::render_layer(layer)?;
        self.layers.insert(layer.kind, rendered);
        self.layers
            .sort_by(|a, _, b, _| a.paint_index().cmp(&b.paint_index()));
        Ok(())
    }

    fn remove_layer(&mut self, kind: LayerKind) -> ChartResult<()> {
        self.layers.shift_remove(&kind);
        Ok(())
    }

    fn unmount(&mut self) -> ChartResult<()> {
        self.layers.clear();
        self.surface = None;
        Ok(())
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

fn fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::Backend(format!("failed to write svg: {err}"))
}
