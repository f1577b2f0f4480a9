use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// Number of chords each cubic segment is flattened into for arc-length lookups.
const CUBIC_FLATTEN_STEPS: usize = 16;

/// Interpolation used between consecutive stacked points.
///
/// Every kind yields a curve whose x grows monotonically along its arc length
/// when the input points are sorted by x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurveKind {
    /// Straight chords through every point.
    Linear,
    /// Monotone cubic Hermite interpolation in x; passes through every point.
    MonotoneX,
    /// Uniform cubic B-spline; smooth, only touches the end points.
    #[default]
    Basis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveSegment {
    Line {
        to: PixelPoint,
    },
    Cubic {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
}

impl CurveSegment {
    #[must_use]
    pub fn end(self) -> PixelPoint {
        match self {
            Self::Line { to } | Self::Cubic { to, .. } => to,
        }
    }
}

/// Rendered curve in pixel space with an arc-length parametrization.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    start: PixelPoint,
    segments: Vec<CurveSegment>,
    polyline: Vec<PixelPoint>,
    cumulative: Vec<f64>,
}

impl CurvePath {
    /// Builds a curve through pixel points sorted ascending by x.
    pub fn build(kind: CurveKind, points: &[PixelPoint]) -> ChartResult<Self> {
        let Some(first) = points.first().copied() else {
            return Err(ChartError::InvalidData(
                "curve requires at least one point".to_owned(),
            ));
        };
        if points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "curve points must be finite".to_owned(),
            ));
        }

        let segments = match (kind, points.len()) {
            (_, 1) => Vec::new(),
            (_, 2) | (CurveKind::Linear, _) => linear_segments(points),
            (CurveKind::MonotoneX, _) => monotone_x_segments(points),
            (CurveKind::Basis, _) => basis_segments(points),
        };
        Ok(Self::from_segments(first, segments))
    }

    #[must_use]
    pub fn from_segments(start: PixelPoint, segments: Vec<CurveSegment>) -> Self {
        let mut polyline = Vec::with_capacity(1 + segments.len() * CUBIC_FLATTEN_STEPS);
        polyline.push(start);
        let mut cursor = start;
        for segment in &segments {
            match *segment {
                CurveSegment::Line { to } => polyline.push(to),
                CurveSegment::Cubic {
                    control1,
                    control2,
                    to,
                } => polyline.extend(flatten_cubic(cursor, control1, control2, to)),
            }
            cursor = segment.end();
        }

        let mut cumulative = Vec::with_capacity(polyline.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in polyline.windows(2) {
            total += pair[0].distance_to(pair[1]);
            cumulative.push(total);
        }

        Self {
            start,
            segments,
            polyline,
            cumulative,
        }
    }

    #[must_use]
    pub fn start(&self) -> PixelPoint {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> PixelPoint {
        self.segments.last().map_or(self.start, |segment| segment.end())
    }

    #[must_use]
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at arc length `length`, clamped to `[0, total_length]`.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> PixelPoint {
        let total = self.total_length();
        if length.is_nan() || length <= 0.0 || total <= 0.0 {
            return self.start;
        }
        if length >= total {
            return self.polyline[self.polyline.len() - 1];
        }

        let upper = self
            .cumulative
            .partition_point(|distance| *distance < length)
            .max(1);
        let lower = upper - 1;
        let chord = self.cumulative[upper] - self.cumulative[lower];
        if chord <= 0.0 {
            return self.polyline[upper];
        }
        let t = (length - self.cumulative[lower]) / chord;
        self.polyline[lower].lerp(self.polyline[upper], t)
    }

    /// Same geometry traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len());
        let mut previous_start = self.start;
        let mut starts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            starts.push(previous_start);
            previous_start = segment.end();
        }
        for (segment, start) in self.segments.iter().zip(starts).rev() {
            segments.push(match *segment {
                CurveSegment::Line { .. } => CurveSegment::Line { to: start },
                CurveSegment::Cubic {
                    control1,
                    control2,
                    ..
                } => CurveSegment::Cubic {
                    control1: control2,
                    control2: control1,
                    to: start,
                },
            });
        }
        Self::from_segments(self.end(), segments)
    }
}

fn linear_segments(points: &[PixelPoint]) -> Vec<CurveSegment> {
    points[1..]
        .iter()
        .map(|to| CurveSegment::Line { to: *to })
        .collect()
}

fn monotone_x_segments(points: &[PixelPoint]) -> Vec<CurveSegment> {
    let count = points.len();
    let secants: Vec<f64> = points
        .windows(2)
        .map(|pair| secant(pair[0], pair[1]))
        .collect();

    let mut tangents = vec![0.0; count];
    for index in 1..count - 1 {
        let h0 = points[index].x - points[index - 1].x;
        let h1 = points[index + 1].x - points[index].x;
        let s0 = secants[index - 1];
        let s1 = secants[index];
        let weighted = if h0 + h1 > 0.0 {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        } else {
            0.0
        };
        tangents[index] =
            (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * weighted.abs());
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[count - 1] =
        end_tangent(points[count - 2], points[count - 1], tangents[count - 2]);

    points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let dx = (pair[1].x - pair[0].x) / 3.0;
            CurveSegment::Cubic {
                control1: PixelPoint::new(pair[0].x + dx, pair[0].y + dx * tangents[index]),
                control2: PixelPoint::new(pair[1].x - dx, pair[1].y - dx * tangents[index + 1]),
                to: pair[1],
            }
        })
        .collect()
}

fn basis_segments(points: &[PixelPoint]) -> Vec<CurveSegment> {
    let count = points.len();
    let mut segments = Vec::with_capacity(count + 1);
    let (p0, p1) = (points[0], points[1]);
    segments.push(CurveSegment::Line {
        to: PixelPoint::new((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0),
    });
    for window in points.windows(3) {
        segments.push(basis_cubic(window[0], window[1], window[2]));
    }
    let (tail0, tail1) = (points[count - 2], points[count - 1]);
    segments.push(basis_cubic(tail0, tail1, tail1));
    segments.push(CurveSegment::Line { to: tail1 });
    segments
}

fn basis_cubic(p0: PixelPoint, p1: PixelPoint, p2: PixelPoint) -> CurveSegment {
    CurveSegment::Cubic {
        control1: PixelPoint::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        control2: PixelPoint::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        to: PixelPoint::new(
            (p0.x + 4.0 * p1.x + p2.x) / 6.0,
            (p0.y + 4.0 * p1.y + p2.y) / 6.0,
        ),
    }
}

fn flatten_cubic(
    from: PixelPoint,
    control1: PixelPoint,
    control2: PixelPoint,
    to: PixelPoint,
) -> SmallVec<[PixelPoint; CUBIC_FLATTEN_STEPS]> {
    (1..=CUBIC_FLATTEN_STEPS)
        .map(|step| {
            let t = step as f64 / CUBIC_FLATTEN_STEPS as f64;
            let u = 1.0 - t;
            let b0 = u * u * u;
            let b1 = 3.0 * u * u * t;
            let b2 = 3.0 * u * t * t;
            let b3 = t * t * t;
            PixelPoint::new(
                b0 * from.x + b1 * control1.x + b2 * control2.x + b3 * to.x,
                b0 * from.y + b1 * control1.y + b2 * control2.y + b3 * to.y,
            )
        })
        .collect()
}

fn secant(from: PixelPoint, to: PixelPoint) -> f64 {
    let h = to.x - from.x;
    if h == 0.0 { 0.0 } else { (to.y - from.y) / h }
}

fn end_tangent(from: PixelPoint, to: PixelPoint, neighbour_tangent: f64) -> f64 {
    if to.x == from.x {
        neighbour_tangent
    } else {
        (3.0 * secant(from, to) - neighbour_tangent) / 2.0
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else if value > 0.0 {
        1.0
    } else {
        0.0
    }
}
