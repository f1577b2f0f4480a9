use std::cell::RefCell;
use std::rc::Rc;

use stacked_area::api::{ChartUpdate, StackedAreaChart, StackedAreaConfig};
use stacked_area::core::{CurveKind, Viewport};
use stacked_area::extensions::{ChartEvent, ChartPlugin, PluginContext};
use stacked_area::interaction::ChartState;
use stacked_area::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::Rendered => "rendered",
        ChartEvent::DataUpdated { .. } => "data",
        ChartEvent::Resized { .. } => "resized",
        ChartEvent::HighlightChanged { .. } => "highlight",
        ChartEvent::HighlightCleared => "highlight_cleared",
        ChartEvent::Unmounted => "unmounted",
    }
}

fn chart() -> StackedAreaChart<NullRenderer> {
    let config = StackedAreaConfig::new(
        Viewport::new(200, 100),
        vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]],
    )
    .with_curve(CurveKind::Linear);
    StackedAreaChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.pointer_move(50.0, 75.0).expect("move");
    chart.flush_frame().expect("highlight");
    chart.pointer_leave().expect("leave");
    chart.flush_frame().expect("clear");
    chart.resize(Viewport::new(300, 100)).expect("resize");
    chart.flush_frame().expect("full");
    chart
        .update(ChartUpdate::series(vec![vec![2.0, 2.0, 2.0], vec![1.0, 1.0, 1.0]]))
        .expect("update");
    chart.unmount().expect("unmount");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "highlight",
            "highlight_cleared",
            "resized",
            "rendered",
            "rendered",
            "data",
            "unmounted",
        ]
    );

    let (_, highlight_context) = events[0];
    assert_eq!(highlight_context.state, ChartState::Highlighted);
    assert_eq!(highlight_context.hovered_series, Some(0));
    assert_eq!(highlight_context.series_count, 2);
    assert_eq!(highlight_context.points_per_series, 3);

    let (_, data_context) = events[5];
    assert_eq!(data_context.value_extent, (0.0, 3.0));
    let (_, last_context) = events[6];
    assert_eq!(last_context.state, ChartState::TornDown);
}

#[test]
fn highlight_event_reports_neighbour_sections() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.pointer_move(150.0, 25.0).expect("move");
    chart.flush_frame().expect("highlight");

    assert_eq!(
        events.borrow().first().map(|(event, _)| *event),
        Some(ChartEvent::HighlightChanged {
            series_index: 1,
            left_section: 1,
            right_section: 2,
        })
    );
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("register");
    assert!(
        chart
            .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
            .is_err()
    );
    assert!(
        chart
            .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
            .is_err()
    );
    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.has_plugin("a"));
    assert!(chart.unregister_plugin("a"));
    assert!(!chart.unregister_plugin("a"));
}
