use criterion::{Criterion, criterion_group, criterion_main};
use stacked_area::api::{StackedAreaChart, StackedAreaConfig};
use stacked_area::core::{
    CurveKind, CurvePath, LinearScale, Viewport, build_stack, intersect_curve_at_x,
};
use stacked_area::render::NullRenderer;
use std::hint::black_box;

fn generated_series(series_count: usize, points: usize) -> Vec<Vec<f64>> {
    (0..series_count)
        .map(|s| {
            (0..points)
                .map(|i| 1.0 + ((i + s * 7) % 13) as f64 * 0.5)
                .collect()
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1920.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.forward(black_box(4_321.123)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_build_stack_8x2k(c: &mut Criterion) {
    let series = generated_series(8, 2_000);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("build_stack_8x2k", |b| {
        b.iter(|| {
            let _ = build_stack(black_box(&series), &[], black_box(viewport))
                .expect("stack should build");
        })
    });
}

fn bench_curve_intersection(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let stack = build_stack(&generated_series(1, 200), &[], viewport).expect("stack");
    let space = stack.coordinate_space(viewport).expect("space");
    let projected = stack.project(space).expect("projection");
    let curve = CurvePath::build(CurveKind::Basis, &projected[0].top).expect("curve");

    c.bench_function("basis_curve_intersection_200", |b| {
        b.iter(|| {
            let _ = intersect_curve_at_x(black_box(&curve), space, black_box(123.4))
                .expect("intersection should converge");
        })
    });
}

fn bench_pointer_move_and_flush(c: &mut Criterion) {
    let config = StackedAreaConfig::new(Viewport::new(1600, 900), generated_series(5, 500));
    let mut chart = StackedAreaChart::new(NullRenderer::default(), config).expect("chart init");

    c.bench_function("pointer_move_flush_5x500", |b| {
        b.iter(|| {
            let _ = chart
                .pointer_move(black_box(800.0), black_box(880.0))
                .expect("pointer move");
            let _ = chart.flush_frame().expect("flush");
        })
    });
}

fn bench_snapshot_json_5x500(c: &mut Criterion) {
    let config = StackedAreaConfig::new(Viewport::new(1600, 900), generated_series(5, 500));
    let chart = StackedAreaChart::new(NullRenderer::default(), config).expect("chart init");

    c.bench_function("snapshot_json_5x500", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_build_stack_8x2k,
    bench_curve_intersection,
    bench_pointer_move_and_flush,
    bench_snapshot_json_5x500
);
criterion_main!(benches);
