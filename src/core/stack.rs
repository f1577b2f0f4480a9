use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CoordinateSpace, DataPoint, HasX, PixelPoint, ValueExtent, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Optional per-series presentation descriptor, matched to series by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesStyle {
    /// Extra CSS class appended to the series' area/border elements.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Fill color used by backends without stylesheet support.
    #[serde(default)]
    pub color: Option<Color>,
}

impl SeriesStyle {
    #[must_use]
    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// One stacked value with its data-space coordinate and series style.
///
/// Built fresh on every stack rebuild; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedPoint {
    pub series_index: usize,
    pub section_index: usize,
    pub value: f64,
    pub baseline: f64,
    pub top: f64,
    pub coord: DataPoint,
    pub style: Option<SeriesStyle>,
}

impl HasX for StackedPoint {
    fn x(&self) -> f64 {
        self.coord.x
    }
}

/// Pixel-space outline of one stacked layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPixels {
    pub series_index: usize,
    pub top: Vec<PixelPoint>,
    pub baseline: Vec<PixelPoint>,
}

/// Full stacked layout for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSnapshot {
    layers: Vec<Vec<StackedPoint>>,
    section_count: usize,
    extent: ValueExtent,
}

impl StackSnapshot {
    #[must_use]
    pub fn layers(&self) -> &[Vec<StackedPoint>] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, series_index: usize) -> Option<&[StackedPoint]> {
        self.layers.get(series_index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn points_per_series(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    #[must_use]
    pub fn extent(&self) -> ValueExtent {
        self.extent
    }

    /// Scales for the given live viewport and this stack's extent.
    pub fn coordinate_space(&self, viewport: Viewport) -> ChartResult<CoordinateSpace> {
        CoordinateSpace::new(viewport, self.section_count, self.extent)
    }

    /// Projects every layer's top and baseline into pixel space.
    pub fn project(&self, space: CoordinateSpace) -> ChartResult<Vec<LayerPixels>> {
        #[cfg(feature = "parallel-projection")]
        {
            let projected: Vec<ChartResult<LayerPixels>> = self
                .layers
                .par_iter()
                .enumerate()
                .map(|(series_index, layer)| project_layer(series_index, layer, space))
                .collect();
            projected.into_iter().collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.layers
                .iter()
                .enumerate()
                .map(|(series_index, layer)| project_layer(series_index, layer, space))
                .collect()
        }
    }
}

fn project_layer(
    series_index: usize,
    layer: &[StackedPoint],
    space: CoordinateSpace,
) -> ChartResult<LayerPixels> {
    let mut top = Vec::with_capacity(layer.len());
    let mut baseline = Vec::with_capacity(layer.len());
    for point in layer {
        let x = space.x_to_pixel(point.coord.x)?;
        top.push(PixelPoint::new(x, space.value_to_pixel(point.top)?));
        baseline.push(PixelPoint::new(x, space.value_to_pixel(point.baseline)?));
    }
    Ok(LayerPixels {
        series_index,
        top,
        baseline,
    })
}

/// Validates raw series and their style list.
///
/// `styles` is either empty (no styling anywhere) or exactly one entry per series.
pub fn validate_series(series: &[Vec<f64>], styles: &[Option<SeriesStyle>]) -> ChartResult<()> {
    let Some(first) = series.first() else {
        return Err(ChartError::InvalidConfig(
            "at least one series is required".to_owned(),
        ));
    };
    if first.is_empty() {
        return Err(ChartError::InvalidConfig(
            "series must contain at least one value".to_owned(),
        ));
    }
    if let Some((index, other)) = series
        .iter()
        .enumerate()
        .find(|(_, other)| other.len() != first.len())
    {
        return Err(ChartError::InvalidConfig(format!(
            "series {index} has {} values, expected {}",
            other.len(),
            first.len()
        )));
    }
    if let Some((series_index, section_index)) = series.iter().enumerate().find_map(|(i, s)| {
        s.iter()
            .position(|value| !value.is_finite())
            .map(|position| (i, position))
    }) {
        return Err(ChartError::InvalidConfig(format!(
            "series {series_index} value {section_index} must be finite"
        )));
    }
    if !styles.is_empty() && styles.len() != series.len() {
        return Err(ChartError::InvalidConfig(format!(
            "got {} series styles for {} series",
            styles.len(),
            series.len()
        )));
    }
    Ok(())
}

/// Builds a zero-baseline stack; series 0 is the bottom layer.
///
/// Point `i` of every series sits at the inverse x-scale of its evenly spaced
/// pixel position for `viewport`, which is section `i` in data space.
pub fn build_stack(
    series: &[Vec<f64>],
    styles: &[Option<SeriesStyle>],
    viewport: Viewport,
) -> ChartResult<StackSnapshot> {
    validate_series(series, styles)?;

    let points_per_series = series[0].len();
    let section_count = points_per_series.saturating_sub(1).max(1);

    let mut running = vec![0.0; points_per_series];
    let mut bounds: Vec<(f64, f64, f64)> = Vec::with_capacity(series.len() * points_per_series);
    for values in series {
        for (section_index, value) in values.iter().enumerate() {
            let baseline = running[section_index];
            let top = baseline + value;
            if !top.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "stacked value at section {section_index} overflows"
                )));
            }
            running[section_index] = top;
            bounds.push((*value, baseline, top));
        }
    }

    // Negative values stack downwards, so either edge can bound the extent.
    let min = bounds
        .iter()
        .map(|(_, baseline, top)| OrderedFloat(baseline.min(*top)))
        .min()
        .map_or(0.0, |value| value.0);
    let max = bounds
        .iter()
        .map(|(_, baseline, top)| OrderedFloat(baseline.max(*top)))
        .max()
        .map_or(0.0, |value| value.0);
    let extent = ValueExtent::new(min, max);
    let space = CoordinateSpace::new(viewport, section_count, extent)?;

    let mut layers = Vec::with_capacity(series.len());
    for (series_index, chunk) in bounds.chunks(points_per_series).enumerate() {
        let style = styles.get(series_index).cloned().flatten();
        let mut layer = Vec::with_capacity(points_per_series);
        for (section_index, (value, baseline, top)) in chunk.iter().copied().enumerate() {
            let x = space.pixel_to_x(space.section_pixel(section_index))?;
            layer.push(StackedPoint {
                series_index,
                section_index,
                value,
                baseline,
                top,
                coord: DataPoint::new(x, top),
                style: style.clone(),
            });
        }
        layers.push(layer);
    }

    debug!(
        series_count = layers.len(),
        points_per_series,
        extent_min = extent.min,
        extent_max = extent.max,
        "built stack snapshot"
    );
    Ok(StackSnapshot {
        layers,
        section_count,
        extent,
    })
}
