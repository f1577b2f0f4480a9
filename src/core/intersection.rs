use serde::{Deserialize, Serialize};

use crate::core::{CoordinateSpace, CurvePath, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Bisection stops once the bracketing arc-length interval is this narrow (pixels).
pub const INTERSECTION_PRECISION_PX: f64 = 0.5;

/// Hard cap on bisection steps; only reached when x is not monotone along the curve.
pub const MAX_BISECTION_STEPS: usize = 64;

/// Result of a curve/vertical-line intersection search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Data-space point on the curve.
    pub point: DataPoint,
    /// Arc length at which `point` was evaluated.
    pub arc_length: f64,
    /// Interval halvings performed before convergence.
    pub steps: usize,
}

/// Finds the point whose x matches `target_x` on a curve parametrized by arc length.
///
/// `point_at` maps an arc length in `[0, total_length]` to a data-space point.
/// The search assumes x grows monotonically with arc length; for other curves
/// it converges on a locally matching point, not necessarily the global one.
pub fn solve_for_x<F>(total_length: f64, target_x: f64, mut point_at: F) -> ChartResult<Intersection>
where
    F: FnMut(f64) -> ChartResult<DataPoint>,
{
    if !total_length.is_finite() || total_length < 0.0 {
        return Err(ChartError::InvalidData(
            "curve length must be finite and >= 0".to_owned(),
        ));
    }
    if !target_x.is_finite() {
        return Err(ChartError::InvalidData(
            "intersection target must be finite".to_owned(),
        ));
    }

    let mut left = 0.0;
    let mut right = total_length;
    let mut steps = 0;
    loop {
        let mid = (left + right) / 2.0;
        let candidate = point_at(mid)?;
        if right - left <= INTERSECTION_PRECISION_PX || steps >= MAX_BISECTION_STEPS {
            return Ok(Intersection {
                point: candidate,
                arc_length: mid,
                steps,
            });
        }

        if candidate.x <= target_x {
            left = mid;
        } else {
            right = mid;
        }
        steps += 1;
    }
}

/// Intersects a rendered pixel-space curve with the vertical line at data-space `target_x`.
pub fn intersect_curve_at_x(
    curve: &CurvePath,
    space: CoordinateSpace,
    target_x: f64,
) -> ChartResult<Intersection> {
    solve_for_x(curve.total_length(), target_x, |length| {
        space.to_data(curve.point_at_length(length))
    })
}

#[cfg(test)]
mod tests {
    use super::{INTERSECTION_PRECISION_PX, intersect_curve_at_x, solve_for_x};
    use crate::core::{
        CoordinateSpace, CurveKind, CurvePath, DataPoint, PixelPoint, ValueExtent, Viewport,
    };
    use crate::error::ChartError;

    #[test]
    fn converges_on_identity_mapping_within_eight_steps() {
        let hit = solve_for_x(100.0, 37.3, |length| Ok(DataPoint::new(length, 0.0)))
            .expect("solve");
        assert!((hit.arc_length - 37.3).abs() <= INTERSECTION_PRECISION_PX);
        assert!(hit.steps <= 8);
    }

    #[test]
    fn zero_length_curve_returns_its_only_point() {
        let hit = solve_for_x(0.0, 5.0, |_| Ok(DataPoint::new(2.0, 3.0))).expect("solve");
        assert_eq!(hit.point, DataPoint::new(2.0, 3.0));
        assert_eq!(hit.steps, 0);
    }

    #[test]
    fn non_monotone_mapping_still_terminates() {
        let hit = solve_for_x(1e12, 0.5, |length| Ok(DataPoint::new((length * 0.01).sin(), 0.0)))
            .expect("solve");
        assert!(hit.steps <= super::MAX_BISECTION_STEPS);
    }

    #[test]
    fn evaluation_errors_propagate() {
        let err = solve_for_x(10.0, 1.0, |_| Err(ChartError::InvalidData("boom".to_owned())))
            .expect_err("must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(solve_for_x(-1.0, 0.0, |l| Ok(DataPoint::new(l, 0.0))).is_err());
        assert!(solve_for_x(1.0, f64::NAN, |l| Ok(DataPoint::new(l, 0.0))).is_err());
    }

    #[test]
    fn rendered_curve_intersection_lands_on_target_x() {
        let space = CoordinateSpace::new(Viewport::new(300, 100), 3, ValueExtent::new(0.0, 10.0))
            .expect("space");
        let pixels = [
            PixelPoint::new(0.0, 90.0),
            PixelPoint::new(100.0, 20.0),
            PixelPoint::new(200.0, 60.0),
            PixelPoint::new(300.0, 10.0),
        ];
        let curve = CurvePath::build(CurveKind::Basis, &pixels).expect("curve");
        let hit = intersect_curve_at_x(&curve, space, 1.5).expect("intersection");
        // 0.5px of arc length is at most 0.5px of x, i.e. 0.005 sections here.
        assert!((hit.point.x - 1.5).abs() <= 0.005 + 1e-9);
    }
}
