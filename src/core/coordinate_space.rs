use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Closed value interval spanned by a stack: lowest to highest band edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns an interval usable as a scale domain.
    ///
    /// A flat extent (all series zero, or a single constant layer) is widened
    /// upward by one unit.
    #[must_use]
    pub fn non_degenerate(self) -> Self {
        if self.max > self.min {
            self
        } else {
            Self {
                min: self.min,
                max: self.min + 1.0,
            }
        }
    }
}

/// Pixel <-> data mapping for one render cycle.
///
/// x: `[0, section_count]` onto `[0, width]`.
/// y: `[extent.min, extent.max]` onto `[height, 0]`.
///
/// Built on demand from the live viewport and the current stack and never
/// kept across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpace {
    viewport: Viewport,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl CoordinateSpace {
    pub fn new(viewport: Viewport, section_count: usize, extent: ValueExtent) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if section_count == 0 {
            return Err(ChartError::InvalidData(
                "section count must be > 0".to_owned(),
            ));
        }
        if !extent.min.is_finite() || !extent.max.is_finite() || extent.min > extent.max {
            return Err(ChartError::InvalidData(
                "value extent must be finite and ordered".to_owned(),
            ));
        }

        let extent = extent.non_degenerate();
        let x_scale = LinearScale::new(
            (0.0, section_count as f64),
            (0.0, f64::from(viewport.width)),
        )?;
        let y_scale = LinearScale::new(
            (extent.min, extent.max),
            (f64::from(viewport.height), 0.0),
        )?;

        Ok(Self {
            viewport,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn x_scale(self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn section_count(self) -> f64 {
        self.x_scale.domain().1
    }

    pub fn x_to_pixel(self, x: f64) -> ChartResult<f64> {
        self.x_scale.forward(x)
    }

    pub fn pixel_to_x(self, pixel: f64) -> ChartResult<f64> {
        self.x_scale.invert(pixel)
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.y_scale.forward(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.y_scale.invert(pixel)
    }

    pub fn to_pixel(self, point: DataPoint) -> ChartResult<PixelPoint> {
        Ok(PixelPoint::new(
            self.x_to_pixel(point.x)?,
            self.value_to_pixel(point.y)?,
        ))
    }

    pub fn to_data(self, pixel: PixelPoint) -> ChartResult<DataPoint> {
        Ok(DataPoint::new(
            self.pixel_to_x(pixel.x)?,
            self.pixel_to_value(pixel.y)?,
        ))
    }

    /// Pixel x of section `index` when sections are spread evenly across the width.
    #[must_use]
    pub fn section_pixel(self, index: usize) -> f64 {
        index as f64 * f64::from(self.viewport.width) / self.section_count()
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateSpace, ValueExtent};
    use crate::core::{DataPoint, Viewport};

    #[test]
    fn y_axis_is_inverted() {
        let space = CoordinateSpace::new(Viewport::new(400, 200), 4, ValueExtent::new(0.0, 10.0))
            .expect("space");
        assert_eq!(space.value_to_pixel(10.0).expect("top"), 0.0);
        assert_eq!(space.value_to_pixel(0.0).expect("bottom"), 200.0);
    }

    #[test]
    fn flat_extent_is_widened() {
        let space = CoordinateSpace::new(Viewport::new(400, 200), 4, ValueExtent::new(0.0, 0.0))
            .expect("space");
        assert_eq!(space.y_scale().domain(), (0.0, 1.0));
    }

    #[test]
    fn section_pixels_are_evenly_spaced() {
        let space = CoordinateSpace::new(Viewport::new(300, 100), 3, ValueExtent::new(0.0, 1.0))
            .expect("space");
        assert_eq!(space.section_pixel(0), 0.0);
        assert_eq!(space.section_pixel(1), 100.0);
        assert_eq!(space.section_pixel(3), 300.0);
    }

    #[test]
    fn point_round_trip() {
        let space = CoordinateSpace::new(Viewport::new(640, 480), 7, ValueExtent::new(-3.0, 12.0))
            .expect("space");
        let point = DataPoint::new(2.25, 4.5);
        let back = space
            .to_data(space.to_pixel(point).expect("to pixel"))
            .expect("to data");
        assert!((back.x - point.x).abs() <= 1e-9);
        assert!((back.y - point.y).abs() <= 1e-9);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(
            CoordinateSpace::new(Viewport::new(0, 10), 1, ValueExtent::new(0.0, 1.0)).is_err()
        );
        assert!(
            CoordinateSpace::new(Viewport::new(10, 10), 0, ValueExtent::new(0.0, 1.0)).is_err()
        );
        assert!(
            CoordinateSpace::new(Viewport::new(10, 10), 1, ValueExtent::new(2.0, 1.0)).is_err()
        );
    }
}
