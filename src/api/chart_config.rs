use serde::{Deserialize, Serialize};

use crate::core::{CurveKind, SeriesStyle, Viewport, validate_series};
use crate::error::{ChartError, ChartResult};

/// CSS class names and element ids applied to rendered primitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    #[serde(default = "default_root_class")]
    pub root: String,
    #[serde(default = "default_area_class")]
    pub area: String,
    #[serde(default = "default_border_class")]
    pub border: String,
    #[serde(default = "default_divider_class")]
    pub divider: String,
    #[serde(default = "default_highlight_circle_class")]
    pub highlight_circle: String,
    #[serde(default = "default_highlight_path_class")]
    pub highlight_path: String,
    /// Id of the clip mask bounding the highlight path.
    #[serde(default = "default_highlight_mask_id")]
    pub highlight_mask_id: String,
}

impl Default for ClassNames {
    /// `stacked-area` root with BEM-style element classes
    /// (`stacked-area__area`, `stacked-area__border`, `stacked-area__divider`,
    /// `stacked-area__highlight-circle`, `stacked-area__highlight`) and
    /// `stacked-area-highlight-mask` as the mask id.
    fn default() -> Self {
        Self {
            root: default_root_class(),
            area: default_area_class(),
            border: default_border_class(),
            divider: default_divider_class(),
            highlight_circle: default_highlight_circle_class(),
            highlight_path: default_highlight_path_class(),
            highlight_mask_id: default_highlight_mask_id(),
        }
    }
}

impl ClassNames {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("root", &self.root),
            ("area", &self.area),
            ("border", &self.border),
            ("divider", &self.divider),
            ("highlight_circle", &self.highlight_circle),
            ("highlight_path", &self.highlight_path),
            ("highlight_mask_id", &self.highlight_mask_id),
        ] {
            if value.trim().is_empty() {
                return Err(ChartError::InvalidConfig(format!(
                    "class name `{name}` must not be empty"
                )));
            }
        }
        if self.highlight_mask_id.contains(char::is_whitespace) {
            return Err(ChartError::InvalidConfig(
                "highlight mask id must not contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts (and the `render_stacked_svg` binary) can load a
/// chart from JSON. Only `viewport` and `series` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedAreaConfig {
    pub viewport: Viewport,
    pub series: Vec<Vec<f64>>,
    /// Empty, or one entry per series; `None` entries carry no styling.
    #[serde(default)]
    pub styles: Vec<Option<SeriesStyle>>,
    #[serde(default)]
    pub class_names: ClassNames,
    #[serde(default)]
    pub curve: CurveKind,
    #[serde(default)]
    pub show_dividers: bool,
    #[serde(default = "default_highlight_radius")]
    pub highlight_radius: f64,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
}

impl StackedAreaConfig {
    #[must_use]
    pub fn new(viewport: Viewport, series: Vec<Vec<f64>>) -> Self {
        Self {
            viewport,
            series,
            styles: Vec::new(),
            class_names: ClassNames::default(),
            curve: CurveKind::default(),
            show_dividers: false,
            highlight_radius: default_highlight_radius(),
            border_width: default_border_width(),
        }
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Vec<Option<SeriesStyle>>) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_dividers(mut self, show_dividers: bool) -> Self {
        self.show_dividers = show_dividers;
        self
    }

    #[must_use]
    pub fn with_highlight_radius(mut self, radius: f64) -> Self {
        self.highlight_radius = radius;
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        validate_series(&self.series, &self.styles)?;
        self.class_names.validate()?;
        if !self.highlight_radius.is_finite() || self.highlight_radius <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "highlight radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "border width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses a JSON config; missing optional fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_root_class() -> String {
    "stacked-area".to_owned()
}

fn default_area_class() -> String {
    "stacked-area__area".to_owned()
}

fn default_border_class() -> String {
    "stacked-area__border".to_owned()
}

fn default_divider_class() -> String {
    "stacked-area__divider".to_owned()
}

fn default_highlight_circle_class() -> String {
    "stacked-area__highlight-circle".to_owned()
}

fn default_highlight_path_class() -> String {
    "stacked-area__highlight".to_owned()
}

fn default_highlight_mask_id() -> String {
    "stacked-area-highlight-mask".to_owned()
}

fn default_highlight_radius() -> f64 {
    4.0
}

fn default_border_width() -> f64 {
    1.5
}
