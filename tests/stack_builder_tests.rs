use approx::assert_relative_eq;
use stacked_area::ChartError;
use stacked_area::core::{SeriesStyle, Viewport, build_stack, find_left, find_right};
use stacked_area::render::Color;

#[test]
fn two_series_stack_on_zero_baseline() {
    let stack = build_stack(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[], Viewport::new(100, 100))
        .expect("stack");

    let bottom = stack.layer(0).expect("series 0");
    let top = stack.layer(1).expect("series 1");
    assert_relative_eq!(bottom[0].baseline, 0.0);
    assert_relative_eq!(bottom[0].top, 1.0);
    assert_relative_eq!(top[0].baseline, 1.0);
    assert_relative_eq!(top[0].top, 4.0);
    assert_relative_eq!(top[1].baseline, 2.0);
    assert_relative_eq!(top[1].top, 6.0);
    assert_eq!(stack.extent().min, 0.0);
    assert_eq!(stack.extent().max, 6.0);
}

#[test]
fn three_by_five_points_carry_their_series_style() {
    let series = vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![5.0, 4.0, 3.0, 2.0, 1.0],
        vec![2.0, 2.0, 2.0, 2.0, 2.0],
    ];
    let styles: Vec<Option<SeriesStyle>> = (0..3)
        .map(|i| Some(SeriesStyle::with_class(format!("series-{i}"))))
        .collect();
    let stack = build_stack(&series, &styles, Viewport::new(400, 200)).expect("stack");

    assert_eq!(stack.series_count(), 3);
    assert_eq!(stack.points_per_series(), 5);
    assert_eq!(stack.section_count(), 4);
    for (series_index, layer) in stack.layers().iter().enumerate() {
        assert_eq!(layer.len(), 5);
        for (section_index, point) in layer.iter().enumerate() {
            assert_eq!(point.series_index, series_index);
            assert_eq!(point.section_index, section_index);
            assert_relative_eq!(point.coord.x, section_index as f64, epsilon = 1e-9);
            assert_relative_eq!(point.coord.y, point.top);
            assert_eq!(point.style.as_ref(), styles[series_index].as_ref());
        }
    }
}

#[test]
fn missing_style_entries_mean_no_styling() {
    let stack = build_stack(
        &[vec![1.0], vec![2.0]],
        &[None, Some(SeriesStyle::default().with_color(Color::rgb(1.0, 0.0, 0.0)))],
        Viewport::new(10, 10),
    )
    .expect("stack");
    assert!(stack.layer(0).expect("series 0")[0].style.is_none());
    assert!(stack.layer(1).expect("series 1")[0].style.is_some());
}

#[test]
fn input_series_are_left_untouched() {
    let series = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let before = series.clone();
    let _ = build_stack(&series, &[], Viewport::new(10, 10)).expect("stack");
    assert_eq!(series, before);
}

#[test]
fn malformed_input_is_rejected() {
    let viewport = Viewport::new(10, 10);
    assert!(matches!(
        build_stack(&[], &[], viewport),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        build_stack(&[vec![]], &[], viewport),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        build_stack(&[vec![1.0, 2.0], vec![1.0]], &[], viewport),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        build_stack(&[vec![1.0, f64::NAN]], &[], viewport),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        build_stack(&[vec![1.0], vec![2.0]], &[None], viewport),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        build_stack(&[vec![1.0]], &[], Viewport::new(0, 10)),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn nearest_points_on_a_stacked_layer() {
    let stack = build_stack(&[vec![1.0, 1.0, 1.0, 1.0]], &[], Viewport::new(300, 100))
        .expect("stack");
    let layer = stack.layer(0).expect("series 0");

    let left = find_left(layer, 1.5).expect("left");
    let right = find_right(layer, 1.5).expect("right");
    assert_eq!((left.section_index, right.section_index), (1, 2));

    let right_on_point = find_right(layer, layer[2].coord.x).expect("right");
    assert_eq!(right_on_point.section_index, 2);
}
