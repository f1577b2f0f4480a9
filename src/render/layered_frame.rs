use crate::error::ChartResult;

use super::{LayerFrame, LayerKind, SurfaceSpec};

/// Complete output of one full render: a fresh surface plus its base layers.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub surface: SurfaceSpec,
    pub layers: Vec<LayerFrame>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(surface: SurfaceSpec) -> Self {
        Self {
            surface,
            layers: Vec::new(),
        }
    }

    /// Inserts `layer` at its paint position, replacing a previous layer of the same kind.
    pub fn push_layer(&mut self, layer: LayerFrame) {
        self.layers.retain(|existing| existing.kind != layer.kind);
        let index = self
            .layers
            .partition_point(|existing| existing.kind.paint_index() < layer.kind.paint_index());
        self.layers.insert(index, layer);
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&LayerFrame> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|layer| layer.kind).collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.surface.validate()?;
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}
