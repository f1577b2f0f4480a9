//! Optional hooks layered on top of the chart lifecycle.

pub mod plugins;

pub use plugins::{ChartEvent, ChartPlugin, PluginContext};
