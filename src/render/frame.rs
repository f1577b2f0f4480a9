use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AreaPrimitive, CirclePrimitive, ClipMaskPrimitive, LayerKind, LinePrimitive, StrokePrimitive,
};

/// Fresh drawing surface requested at the start of every full render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub viewport: Viewport,
    pub root_class: String,
}

impl SurfaceSpec {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }
}

/// Backend-agnostic content of one named layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFrame {
    pub kind: LayerKind,
    pub areas: Vec<AreaPrimitive>,
    pub strokes: Vec<StrokePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub clip_masks: Vec<ClipMaskPrimitive>,
}

impl LayerFrame {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            areas: Vec::new(),
            strokes: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            clip_masks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaPrimitive) -> Self {
        self.areas.push(area);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokePrimitive) -> Self {
        self.strokes.push(stroke);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_clip_mask(mut self, mask: ClipMaskPrimitive) -> Self {
        self.clip_masks.push(mask);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for area in &self.areas {
            area.validate()?;
        }
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for mask in &self.clip_masks {
            mask.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.areas.len()
            + self.strokes.len()
            + self.lines.len()
            + self.circles.len()
            + self.clip_masks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
