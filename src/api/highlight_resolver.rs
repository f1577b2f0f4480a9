use tracing::trace;

use crate::core::{
    CoordinateSpace, PixelPoint, StackSnapshot, find_left, find_right, intersect_curve_at_x,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightState;

use super::SeriesGeometry;

/// Series whose rendered band contains `pointer`, if any.
///
/// Each band is sampled at the pointer's x by intersecting its top and
/// baseline curves; layers painted later win on shared edges.
pub fn hit_test_series(
    geometry: &[SeriesGeometry],
    space: CoordinateSpace,
    pointer: PixelPoint,
) -> ChartResult<Option<usize>> {
    let width = f64::from(space.viewport().width);
    let height = f64::from(space.viewport().height);
    if !pointer.is_finite()
        || !(0.0..=width).contains(&pointer.x)
        || !(0.0..=height).contains(&pointer.y)
    {
        return Ok(None);
    }

    let target_x = space.pixel_to_x(pointer.x)?;
    let pointer_value = space.pixel_to_value(pointer.y)?;
    for series in geometry.iter().rev() {
        let top = intersect_curve_at_x(&series.top, space, target_x)?;
        let baseline = intersect_curve_at_x(&series.baseline, space, target_x)?;
        let (low, high) = if baseline.point.y <= top.point.y {
            (baseline.point.y, top.point.y)
        } else {
            (top.point.y, baseline.point.y)
        };
        if (low..=high).contains(&pointer_value) {
            return Ok(Some(series.series_index));
        }
    }
    Ok(None)
}

/// Highlight for `series_index` with the pointer at `pointer`.
///
/// The neighbours come from the stacked points either side of the pointer's
/// data x; their projections lie on the rendered top curve, which for
/// smoothing curves differs from the raw stacked values.
pub fn resolve_highlight(
    stack: &StackSnapshot,
    geometry: &[SeriesGeometry],
    space: CoordinateSpace,
    series_index: usize,
    pointer: PixelPoint,
) -> ChartResult<HighlightState> {
    if !pointer.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    let points = stack.layer(series_index).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "series index {series_index} is out of range for {} series",
            stack.series_count()
        ))
    })?;
    let series = geometry
        .iter()
        .find(|series| series.series_index == series_index)
        .ok_or_else(|| {
            ChartError::InvalidData(format!("no geometry for series {series_index}"))
        })?;

    let pointer_x = space
        .pixel_to_x(pointer.x)?
        .clamp(0.0, space.section_count());
    let empty = || ChartError::InvalidData(format!("series {series_index} has no points"));
    let left = find_left(points, pointer_x).ok_or_else(empty)?;
    let right = find_right(points, pointer_x).ok_or_else(empty)?;

    // A single-point series is drawn as a band over the whole width; its
    // right edge stands in for the missing right neighbour.
    let right_x = if points.len() == 1 {
        space.section_count()
    } else {
        right.coord.x
    };
    let left_hit = intersect_curve_at_x(&series.top, space, left.coord.x)?;
    let right_hit = intersect_curve_at_x(&series.top, space, right_x)?;
    trace!(
        series_index,
        pointer_x,
        left_section = left.section_index,
        right_section = right.section_index,
        steps = left_hit.steps + right_hit.steps,
        "resolved highlight"
    );

    Ok(HighlightState {
        series_index,
        pointer,
        pointer_x,
        left: left.clone(),
        right: right.clone(),
        left_projection: left_hit.point,
        right_projection: right_hit.point,
        left_pixel: space.to_pixel(left_hit.point)?,
        right_pixel: space.to_pixel(right_hit.point)?,
        solver_steps: left_hit.steps + right_hit.steps,
    })
}
