use serde::{Deserialize, Serialize};

use crate::core::SeriesStyle;

use super::StackedAreaConfig;

/// Partial data update; absent fields keep their current values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartUpdate {
    #[serde(default)]
    pub series: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub styles: Option<Vec<Option<SeriesStyle>>>,
}

impl ChartUpdate {
    #[must_use]
    pub fn series(series: Vec<Vec<f64>>) -> Self {
        Self {
            series: Some(series),
            styles: None,
        }
    }

    #[must_use]
    pub fn styles(styles: Vec<Option<SeriesStyle>>) -> Self {
        Self {
            series: None,
            styles: Some(styles),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<Vec<f64>>) -> Self {
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Vec<Option<SeriesStyle>>) -> Self {
        self.styles = Some(styles);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_none() && self.styles.is_none()
    }

    /// Candidate config with this update merged over `current`.
    #[must_use]
    pub(crate) fn merged_over(&self, current: &StackedAreaConfig) -> StackedAreaConfig {
        let mut next = current.clone();
        if let Some(series) = &self.series {
            next.series.clone_from(series);
        }
        if let Some(styles) = &self.styles {
            next.styles.clone_from(styles);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::ChartUpdate;
    use crate::api::StackedAreaConfig;
    use crate::core::{SeriesStyle, Viewport};

    #[test]
    fn styles_only_update_keeps_series() {
        let current = StackedAreaConfig::new(Viewport::new(10, 10), vec![vec![1.0, 2.0]]);
        let next = ChartUpdate::styles(vec![Some(SeriesStyle::with_class("a"))])
            .merged_over(&current);
        assert_eq!(next.series, current.series);
        assert_eq!(next.styles.len(), 1);
    }

    #[test]
    fn empty_update_is_identity() {
        let current = StackedAreaConfig::new(Viewport::new(10, 10), vec![vec![1.0]]);
        assert!(ChartUpdate::default().is_empty());
        assert_eq!(ChartUpdate::default().merged_over(&current), current);
    }
}
