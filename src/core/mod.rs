pub mod coordinate_space;
pub mod curve;
pub mod intersection;
pub mod nearest;
pub mod scale;
pub mod stack;
pub mod types;

pub use coordinate_space::{CoordinateSpace, ValueExtent};
pub use curve::{CurveKind, CurvePath, CurveSegment};
pub use intersection::{
    INTERSECTION_PRECISION_PX, Intersection, MAX_BISECTION_STEPS, intersect_curve_at_x,
    solve_for_x,
};
pub use nearest::{find_left, find_right};
pub use scale::LinearScale;
pub use stack::{
    LayerPixels, SeriesStyle, StackSnapshot, StackedPoint, build_stack, validate_series,
};
pub use types::{DataPoint, HasX, PixelPoint, Viewport};
