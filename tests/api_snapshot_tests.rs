use stacked_area::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, FrameRequestKind,
    StackedAreaChart, StackedAreaConfig,
};
use stacked_area::core::{CurveKind, SeriesStyle, Viewport};
use stacked_area::interaction::ChartState;
use stacked_area::render::{Color, NullRenderer};

fn config() -> StackedAreaConfig {
    StackedAreaConfig::new(
        Viewport::new(640, 480),
        vec![vec![1.0, 2.5, 4.0], vec![3.0, 1.0, 0.5], vec![2.0, 2.0, 2.0]],
    )
    .with_styles(vec![
        None,
        Some(SeriesStyle::with_class("costs").with_color(Color::rgb(1.0, 0.0, 0.0))),
        Some(SeriesStyle::with_class("margin")),
    ])
    .with_curve(CurveKind::MonotoneX)
}

#[test]
fn stacked_area_config_json_roundtrip() {
    let config = config().with_dividers(true).with_highlight_radius(6.0);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = StackedAreaConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_json_fills_defaults() {
    let json = r#"{
        "viewport": { "width": 300, "height": 120 },
        "series": [[1.0, 2.0], [2.0, 1.0]]
    }"#;
    let config = StackedAreaConfig::from_json_str(json).expect("minimal config");

    assert_eq!(config.curve, CurveKind::Basis);
    assert!(config.styles.is_empty());
    assert!(!config.show_dividers);
    assert_eq!(config.class_names.root, "stacked-area");
}

#[test]
fn snapshot_preserves_series_class_order_and_geometry() {
    let chart = StackedAreaChart::new(NullRenderer::default(), config()).expect("chart init");
    let snapshot = chart.snapshot().expect("snapshot should build");

    let classes: Vec<(usize, &str)> = snapshot
        .series_classes
        .iter()
        .map(|(index, class)| (*index, class.as_str()))
        .collect();
    assert_eq!(classes, vec![(1, "costs"), (2, "margin")]);
    assert_eq!(snapshot.state, ChartState::Rendered);
    assert_eq!(snapshot.section_count, 2);
    assert_eq!(snapshot.value_extent, (0.0, 6.5));
    assert_eq!(snapshot.layers.len(), 3);
    assert_eq!(snapshot.projected.len(), 3);
    assert_eq!(snapshot.full_render_count, 1);
    assert!(snapshot.pending_frame.is_none());
    assert!(snapshot.highlight.is_none());
}

#[test]
fn snapshot_reports_pending_frame_and_live_highlight() {
    let mut chart = StackedAreaChart::new(NullRenderer::default(), config()).expect("chart init");
    let hovered = chart.pointer_move(320.0, 470.0).expect("move");
    assert_eq!(hovered, Some(0));

    let pending = chart.snapshot().expect("snapshot");
    assert_eq!(pending.pending_frame, Some(FrameRequestKind::Highlight));
    assert!(pending.highlight.is_none());

    chart.flush_frame().expect("flush");
    let drawn = chart.snapshot().expect("snapshot");
    assert!(drawn.pending_frame.is_none());
    assert_eq!(drawn.state, ChartState::Highlighted);
    assert_eq!(
        drawn.highlight.as_ref().map(|highlight| highlight.series_index),
        Some(0)
    );
}

#[test]
fn snapshot_json_contract_roundtrip() {
    let chart = StackedAreaChart::new(NullRenderer::default(), config()).expect("chart init");

    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize");
    let payload: ChartSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract json should deserialize");
    assert_eq!(payload.schema_version, CHART_SNAPSHOT_JSON_SCHEMA_V1);

    let decoded = ChartSnapshot::from_json_compat_str(&json).expect("compat parse");
    assert_eq!(decoded.layers.len(), 3);
    assert_eq!(decoded.series_classes.get(&1).map(String::as_str), Some("costs"));

    let bare = chart.snapshot_json_pretty().expect("bare snapshot");
    let decoded_bare = ChartSnapshot::from_json_compat_str(&bare).expect("bare compat parse");
    assert_eq!(decoded_bare.section_count, decoded.section_count);
}

#[test]
fn unknown_contract_version_is_rejected() {
    let chart = StackedAreaChart::new(NullRenderer::default(), config()).expect("chart init");
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("contract should serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 9", 1);

    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn snapshot_after_unmount_fails() {
    let mut chart = StackedAreaChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.unmount().expect("unmount");
    assert!(chart.snapshot().is_err());
}
