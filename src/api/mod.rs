mod chart_config;
mod chart_snapshot;
mod chart_update;
mod data_controller;
mod engine;
mod frame_scheduler;
mod highlight_resolver;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod scene_builder;
mod snapshot_controller;

pub use chart_config::{ClassNames, StackedAreaConfig};
pub use chart_snapshot::ChartSnapshot;
pub use chart_update::ChartUpdate;
pub use engine::StackedAreaChart;
pub use frame_scheduler::{FrameOutcome, FrameRequest, FrameRequestKind, FrameScheduler};
pub use highlight_resolver::{hit_test_series, resolve_highlight};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use scene_builder::{
    SeriesGeometry, build_base_scene, build_highlight_layers, build_series_geometry,
};
