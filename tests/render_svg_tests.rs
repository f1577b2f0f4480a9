use stacked_area::api::{ClassNames, StackedAreaChart, StackedAreaConfig};
use stacked_area::core::{SeriesStyle, Viewport};
use stacked_area::render::{Color, SvgRenderer};

fn config() -> StackedAreaConfig {
    StackedAreaConfig::new(
        Viewport::new(400, 200),
        vec![vec![3.0, 4.0, 2.0, 5.0], vec![1.0, 2.0, 2.0, 1.0]],
    )
    .with_styles(vec![
        Some(SeriesStyle::with_class("revenue").with_color(Color::rgb(0.0, 0.5, 1.0))),
        None,
    ])
    .with_dividers(true)
}

#[test]
fn document_contains_layers_in_paint_order() {
    let chart = StackedAreaChart::new(SvgRenderer::new(), config()).expect("chart init");
    let doc = chart.renderer().document().expect("document");

    assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" class="stacked-area" width="400" height="200""#));
    let areas = doc.find(r#"data-layer="areas""#).expect("areas");
    let borders = doc.find(r#"data-layer="borders""#).expect("borders");
    let dividers = doc.find(r#"data-layer="dividers""#).expect("dividers");
    assert!(areas < borders && borders < dividers);

    assert!(doc.contains(r#"class="stacked-area__area revenue""#));
    assert!(doc.contains(r#"fill="rgba(0,128,255,1)""#));
    assert_eq!(doc.matches("<line ").count(), 4);
    assert!(!doc.contains("<defs>"));
}

#[test]
fn hover_adds_masked_highlight_with_two_circles() {
    let mut chart = StackedAreaChart::new(SvgRenderer::new(), config()).expect("chart init");
    let hovered = chart.pointer_move(150.0, 190.0).expect("move");
    assert_eq!(hovered, Some(0));
    chart.flush_frame().expect("flush");

    let doc = chart.renderer().document().expect("document");
    assert!(doc.contains(r#"<clipPath id="stacked-area-highlight-mask">"#));
    assert!(doc.contains(r#"clip-path="url(#stacked-area-highlight-mask)""#));
    assert!(doc.contains(r#"class="stacked-area__highlight""#));
    assert_eq!(doc.matches("<circle ").count(), 2);

    chart.pointer_leave().expect("leave");
    chart.flush_frame().expect("flush");
    let doc = chart.renderer().document().expect("document");
    assert!(!doc.contains("<clipPath"));
    assert!(!doc.contains("<circle "));
}

#[test]
fn custom_class_names_are_applied() {
    let names = ClassNames {
        root: "sales".to_owned(),
        highlight_mask_id: "sales-mask".to_owned(),
        ..ClassNames::default()
    };
    let mut chart = StackedAreaChart::new(SvgRenderer::new(), config().with_class_names(names))
        .expect("chart init");
    chart.pointer_move(150.0, 190.0).expect("move");
    chart.flush_frame().expect("flush");

    let doc = chart.renderer().document().expect("document");
    assert!(doc.contains(r#"class="sales""#));
    assert!(doc.contains(r#"url(#sales-mask)"#));
}
