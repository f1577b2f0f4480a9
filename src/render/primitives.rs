use serde::{Deserialize, Serialize};

use crate::core::{CurvePath, CurveSegment, PixelPoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgba(...)` notation with 8-bit color channels.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
    Close,
}

/// Backend-agnostic outline in pixel space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn from_curve(curve: &CurvePath) -> Self {
        let mut path = Self::default();
        path.commands.push(PathCommand::MoveTo(curve.start()));
        path.extend_segments(curve);
        path
    }

    /// Closed outline between two curves: `upper` forward, then `lower` backward.
    #[must_use]
    pub fn band(upper: &CurvePath, lower: &CurvePath) -> Self {
        let mut path = Self::from_curve(upper);
        let lower = lower.reversed();
        path.commands.push(PathCommand::LineTo(lower.start()));
        path.extend_segments(&lower);
        path.commands.push(PathCommand::Close);
        path
    }

    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            commands: vec![
                PathCommand::MoveTo(PixelPoint::new(x, y)),
                PathCommand::LineTo(PixelPoint::new(x + width, y)),
                PathCommand::LineTo(PixelPoint::new(x + width, y + height)),
                PathCommand::LineTo(PixelPoint::new(x, y + height)),
                PathCommand::Close,
            ],
        }
    }

    fn extend_segments(&mut self, curve: &CurvePath) {
        self.commands
            .extend(curve.segments().iter().map(|segment| match *segment {
                CurveSegment::Line { to } => PathCommand::LineTo(to),
                CurveSegment::Cubic {
                    control1,
                    control2,
                    to,
                } => PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                },
            }));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG `d` attribute.
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match command {
                PathCommand::MoveTo(p) => out.push_str(&format!("M{:.3},{:.3}", p.x, p.y)),
                PathCommand::LineTo(p) => out.push_str(&format!("L{:.3},{:.3}", p.x, p.y)),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => out.push_str(&format!(
                    "C{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                )),
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move-to command".to_owned(),
            ));
        }
        let finite = self.commands.iter().all(|command| match command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        });
        if !finite {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Filled region, optionally clipped by a mask defined in another layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPrimitive {
    pub series_index: usize,
    pub path: PathData,
    pub class: String,
    pub fill: Option<Color>,
    pub clip_mask_id: Option<String>,
}

impl AreaPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Stroked open path (area borders).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePrimitive {
    pub series_index: usize,
    pub path: PathData,
    pub class: String,
    pub stroke_width: f64,
    pub color: Option<Color>,
}

impl StrokePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub class: String,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, class: String) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub class: String,
    pub color: Option<Color>,
}

impl CirclePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Named clipping region referenced by `AreaPrimitive::clip_mask_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipMaskPrimitive {
    pub id: String,
    pub path: PathData,
}

impl ClipMaskPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "clip mask id must not be empty".to_owned(),
            ));
        }
        self.path.validate()
    }
}
