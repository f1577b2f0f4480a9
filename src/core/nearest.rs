use crate::core::HasX;

/// Returns the point with the largest x strictly left of `reference_x`.
///
/// Left-to-right fold seeded with the first point: a candidate replaces the
/// accumulator only when `candidate.x < reference_x` and
/// `candidate.x >= acc.x`. When no point lies left of the reference the first
/// point is returned. Input is expected sorted ascending by x.
#[must_use]
pub fn find_left<T: HasX>(points: &[T], reference_x: f64) -> Option<&T> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(first, |acc, candidate| {
        if candidate.x() < reference_x && candidate.x() >= acc.x() {
            candidate
        } else {
            acc
        }
    }))
}

/// Returns the point with the smallest x at or right of `reference_x`.
///
/// Right-to-left fold seeded with the last point: a candidate replaces the
/// accumulator only when `candidate.x >= reference_x` and
/// `candidate.x <= acc.x`. When no point lies at or right of the reference
/// the last point is returned.
#[must_use]
pub fn find_right<T: HasX>(points: &[T], reference_x: f64) -> Option<&T> {
    let (last, rest) = points.split_last()?;
    Some(rest.iter().rev().fold(last, |acc, candidate| {
        if candidate.x() >= reference_x && candidate.x() <= acc.x() {
            candidate
        } else {
            acc
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::{find_left, find_right};
    use crate::core::DataPoint;

    fn points(xs: &[f64]) -> Vec<DataPoint> {
        xs.iter().map(|x| DataPoint::new(*x, *x * 10.0)).collect()
    }

    #[test]
    fn neighbours_bracket_reference() {
        let pts = points(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(find_left(&pts, 1.5).map(|p| p.x), Some(1.0));
        assert_eq!(find_right(&pts, 1.5).map(|p| p.x), Some(2.0));
    }

    #[test]
    fn right_boundary_is_inclusive_and_left_is_strict() {
        let pts = points(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(find_right(&pts, 2.0).map(|p| p.x), Some(2.0));
        assert_eq!(find_left(&pts, 2.0).map(|p| p.x), Some(1.0));
    }

    #[test]
    fn out_of_range_references_fall_back_to_fold_seed() {
        let pts = points(&[0.0, 1.0, 2.0]);
        assert_eq!(find_left(&pts, -5.0).map(|p| p.x), Some(0.0));
        assert_eq!(find_right(&pts, 9.0).map(|p| p.x), Some(2.0));
    }

    #[test]
    fn empty_input_yields_none() {
        let pts: Vec<DataPoint> = Vec::new();
        assert!(find_left(&pts, 0.0).is_none());
        assert!(find_right(&pts, 0.0).is_none());
    }
}
