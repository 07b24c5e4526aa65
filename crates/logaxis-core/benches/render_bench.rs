use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logaxis_core::{base_options, render_png_bytes, y_axis_options, AxisType, RenderOptions};

fn bench_options(c: &mut Criterion) {
    c.bench_function("base_options", |b| b.iter(|| black_box(base_options().unwrap())));
    let base = base_options().unwrap();
    c.bench_function("with_y_axis", |b| {
        b.iter(|| black_box(base.with_y_axis(y_axis_options(AxisType::Linear, 2.0))))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png");
    let opts = RenderOptions { draw_labels: false, ..Default::default() };
    for (axis_type, tick) in [(AxisType::Logarithmic, 1.0), (AxisType::Logarithmic, 0.2), (AxisType::Linear, 1.0)] {
        let options = base_options().unwrap().with_y_axis(y_axis_options(axis_type, tick));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{axis_type}_{tick}")), &options, |b, o| {
            b.iter(|| black_box(render_png_bytes(o, &opts).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_options, bench_render);
criterion_main!(benches);
