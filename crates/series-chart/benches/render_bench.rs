use anyhow::Result;
use series_chart::{Chart, FrameRenderer, Layout, LineColor, RenderOptions, Series};
use series_core::{Slider, SliderId, SliderSpec};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let xs: Vec<f64> = (0..n).map(|i| -10.0 + 20.0 * i as f64 / (n - 1) as f64).collect();
    let mut ch = Chart::new().with_title("Series Approximation");
    ch.add_series(Series::line("target", xs.iter().map(|&x| (x, x.sin())).collect()));
    ch.add_series(
        Series::line("approximation", xs.iter().map(|&x| (x, x - x * x * x / 6.0)).collect())
            .with_color(LineColor::Accent),
    );
    ch
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame_rgba8");
    let renderer = FrameRenderer::new();
    let order = Slider::new(SliderId::Order, SliderSpec::order());
    let x0 = Slider::new(SliderId::ExpansionPoint, SliderSpec::expansion_point());
    for &n in &[50usize, 5_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            let layout = Layout::default();
            b.iter(|| -> Result<()> {
                let frame = renderer.render_rgba8(&ch, &[&order, &x0], &layout, &opts)?;
                black_box(frame);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
