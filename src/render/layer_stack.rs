use serde::{Deserialize, Serialize};

/// Named drawing layers. At most one live layer exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Areas,
    Borders,
    Dividers,
    HighlightMask,
    Highlight,
}

impl LayerKind {
    /// Paint order; later layers are never occluded by earlier ones.
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Areas,
        Self::Borders,
        Self::Dividers,
        Self::HighlightMask,
        Self::Highlight,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Areas => "areas",
            Self::Borders => "borders",
            Self::Dividers => "dividers",
            Self::HighlightMask => "highlight-mask",
            Self::Highlight => "highlight",
        }
    }

    #[must_use]
    pub fn paint_index(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::CANONICAL_ORDER.len())
    }

    /// Layers touched by the interactive overlay; everything else belongs to a full render.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::HighlightMask | Self::Highlight)
    }
}
