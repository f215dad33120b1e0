// File: crates/series-chart/tests/smoke.rs
// Purpose: End-to-end render of the two-curve chart to PNG bytes and to a file.

use series_chart::{Chart, LineColor, RenderOptions, Series};

fn two_curve_chart() -> Chart {
    let xs: Vec<f64> = (0..50).map(|i| -10.0 + 20.0 * i as f64 / 49.0).collect();
    let mut chart = Chart::new().with_title("Series Approximation");
    chart.add_series(Series::line("target", xs.iter().map(|&x| (x, x.sin())).collect()));
    chart.add_series(Series::line("approximation", xs.iter().map(|&x| (x, 0.96 * x)).collect()).with_color(LineColor::Accent));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = two_curve_chart();
    let opts = RenderOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn replace_series_data_swaps_points_by_name() {
    let mut chart = two_curve_chart();
    assert!(chart.replace_series_data("approximation", vec![(0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(chart.series[1].data_xy, vec![(0.0, 0.0), (1.0, 1.0)]);
    assert!(!chart.replace_series_data("missing", Vec::new()));
}

#[test]
fn non_finite_and_off_scale_points_do_not_break_rendering() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(
        "wild",
        vec![(-6.0, 0.0), (-3.0, f64::NAN), (0.0, 1e300), (3.0, -1e300), (6.0, f64::INFINITY)],
    ));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    chart.render_to_png_bytes(&opts).expect("render bytes");
}
