use crate::core::{
    CoordinateSpace, CurveKind, CurvePath, LayerPixels, PixelPoint, SeriesStyle, StackSnapshot,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightState;
use crate::render::{
    AreaPrimitive, CirclePrimitive, ClipMaskPrimitive, LayerFrame, LayerKind, LinePrimitive,
    PathData, SceneFrame, StrokePrimitive, SurfaceSpec,
};

use super::StackedAreaConfig;

const DIVIDER_STROKE_WIDTH: f64 = 1.0;

/// Rendered top and baseline curves of one stacked layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGeometry {
    pub series_index: usize,
    pub top: CurvePath,
    pub baseline: CurvePath,
}

impl SeriesGeometry {
    #[must_use]
    pub fn band(&self) -> PathData {
        PathData::band(&self.top, &self.baseline)
    }
}

/// Projects `stack` for the live viewport and builds its curves.
///
/// A single-section series is drawn as a flat band across the full width.
pub fn build_series_geometry(
    stack: &StackSnapshot,
    space: CoordinateSpace,
    curve: CurveKind,
) -> ChartResult<Vec<SeriesGeometry>> {
    let width = f64::from(space.viewport().width);
    stack
        .project(space)?
        .into_iter()
        .map(|LayerPixels { series_index, mut top, mut baseline }| {
            if top.len() == 1 && baseline.len() == 1 {
                let (only_top, only_base) = (top[0], baseline[0]);
                top.push(PixelPoint::new(width, only_top.y));
                baseline.push(PixelPoint::new(width, only_base.y));
            }
            Ok(SeriesGeometry {
                series_index,
                top: CurvePath::build(curve, &top)?,
                baseline: CurvePath::build(curve, &baseline)?,
            })
        })
        .collect()
}

/// Surface plus Areas, Borders and (optionally) Dividers layers.
pub fn build_base_scene(
    stack: &StackSnapshot,
    geometry: &[SeriesGeometry],
    space: CoordinateSpace,
    config: &StackedAreaConfig,
) -> ChartResult<SceneFrame> {
    let names = &config.class_names;
    let mut scene = SceneFrame::new(SurfaceSpec {
        viewport: space.viewport(),
        root_class: names.root.clone(),
    });

    let mut areas = LayerFrame::new(LayerKind::Areas);
    let mut borders = LayerFrame::new(LayerKind::Borders);
    for series in geometry {
        let style = series_style(stack, series.series_index);
        areas = areas.with_area(AreaPrimitive {
            series_index: series.series_index,
            path: series.band(),
            class: styled_class(&names.area, style),
            fill: style.and_then(|style| style.color),
            clip_mask_id: None,
        });
        borders = borders.with_stroke(StrokePrimitive {
            series_index: series.series_index,
            path: PathData::from_curve(&series.top),
            class: styled_class(&names.border, style),
            stroke_width: config.border_width,
            color: None,
        });
    }
    scene.push_layer(areas);
    scene.push_layer(borders);

    if config.show_dividers {
        let height = f64::from(space.viewport().height);
        let dividers = (0..=stack.section_count()).fold(
            LayerFrame::new(LayerKind::Dividers),
            |layer, section| {
                let x = space.section_pixel(section);
                layer.with_line(LinePrimitive::new(
                    x,
                    0.0,
                    x,
                    height,
                    DIVIDER_STROKE_WIDTH,
                    names.divider.clone(),
                ))
            },
        );
        scene.push_layer(dividers);
    }

    scene.validate()?;
    Ok(scene)
}

/// Clip mask layer and highlight overlay layer for `highlight`.
pub fn build_highlight_layers(
    highlight: &HighlightState,
    geometry: &[SeriesGeometry],
    space: CoordinateSpace,
    config: &StackedAreaConfig,
) -> ChartResult<(LayerFrame, LayerFrame)> {
    let names = &config.class_names;
    let series = geometry
        .iter()
        .find(|series| series.series_index == highlight.series_index)
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "no geometry for highlighted series {}",
                highlight.series_index
            ))
        })?;

    let (left, right) = highlight.clip_span();
    let height = f64::from(space.viewport().height);
    let mask = LayerFrame::new(LayerKind::HighlightMask).with_clip_mask(ClipMaskPrimitive {
        id: names.highlight_mask_id.clone(),
        path: PathData::rect(left, 0.0, right - left, height),
    });

    let circle = |center: PixelPoint| CirclePrimitive {
        center,
        radius: config.highlight_radius,
        class: names.highlight_circle.clone(),
        color: None,
    };
    let overlay = LayerFrame::new(LayerKind::Highlight)
        .with_area(AreaPrimitive {
            series_index: series.series_index,
            path: series.band(),
            class: names.highlight_path.clone(),
            fill: None,
            clip_mask_id: Some(names.highlight_mask_id.clone()),
        })
        .with_circle(circle(highlight.left_pixel))
        .with_circle(circle(highlight.right_pixel));

    mask.validate()?;
    overlay.validate()?;
    Ok((mask, overlay))
}

fn series_style(stack: &StackSnapshot, series_index: usize) -> Option<&SeriesStyle> {
    stack
        .layer(series_index)
        .and_then(|layer| layer.first())
        .and_then(|point| point.style.as_ref())
}

fn styled_class(base: &str, style: Option<&SeriesStyle>) -> String {
    match style.and_then(|style| style.class_name.as_deref()) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_owned(),
    }
}
