use series_core::{approximate, generate_grid, ExplorerConfig, Controller};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_approximate(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate");
    for &n in &[50usize, 5_000usize] {
        let grid = generate_grid(-10.0, 10.0, n).expect("grid");
        for &order in &[2u32, 10u32] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_order{order}")), &order, |b, &o| {
                b.iter(|| {
                    let ys = approximate(f64::sin, 0.3, o, 0.5, &grid).expect("approximate");
                    black_box(ys);
                });
            });
        }
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    // One tick must stay far below the 100ms period.
    let mut controller = Controller::new(&ExplorerConfig::default(), f64::sin).expect("controller");
    c.bench_function("controller_tick", |b| {
        b.iter(|| black_box(controller.on_tick()));
    });
}

criterion_group!(benches, bench_approximate, bench_tick);
criterion_main!(benches);
