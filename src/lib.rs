//! stacked-area-rs: interactive stacked-area chart engine.
//!
//! Series are stacked on a zero baseline, drawn as filled areas with borders
//! and optional section dividers, and carry a per-area hover highlight that
//! tracks the rendered curves. Drawing goes through the backend-agnostic
//! [`render::Renderer`] trait; an SVG backend is always available, Cairo and
//! a GTK4 host adapter sit behind features.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartUpdate, StackedAreaChart, StackedAreaConfig};
pub use error::{ChartError, ChartResult};
