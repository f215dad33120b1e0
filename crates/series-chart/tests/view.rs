// File: crates/series-chart/tests/view.rs
// Purpose: Pan, zoom and pixel-to-world mapping against the plot rectangle.

use series_chart::view::{MAX_SPAN, MIN_SPAN};
use series_chart::{Chart, Layout, RectI32, ViewState};

fn plot() -> RectI32 {
    RectI32::from_ltwh(100, 50, 400, 200)
}

#[test]
fn pan_moves_content_with_the_pointer() {
    let mut v = ViewState::new((-6.0, 6.0), (-2.0, 2.0));
    // drag right by a quarter plot width: view shifts left by a quarter span
    v.pan_by_pixels(100.0, 0.0, &plot());
    assert!((v.x_min - -9.0).abs() < 1e-12);
    assert!((v.x_max - 3.0).abs() < 1e-12);
    // drag down by half the height: view shifts up by half the span
    v.pan_by_pixels(0.0, 100.0, &plot());
    assert!((v.y_min - 0.0).abs() < 1e-12);
    assert!((v.y_max - 4.0).abs() < 1e-12);
}

#[test]
fn zoom_keeps_point_under_cursor_fixed() {
    let mut v = ViewState::new((-6.0, 6.0), (-2.0, 2.0));
    let (cx, cy) = (200.0, 100.0);
    let before = v.world_at(cx, cy, &plot()).unwrap();
    v.zoom_at_pixel(0.5, cx, cy, &plot());
    let after = v.world_at(cx, cy, &plot()).unwrap();
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);
    assert!(((v.x_max - v.x_min) - 6.0).abs() < 1e-9);
    assert!(((v.y_max - v.y_min) - 2.0).abs() < 1e-9);
}

#[test]
fn world_at_maps_corners_and_rejects_outside() {
    let v = ViewState::new((-6.0, 6.0), (-2.0, 2.0));
    assert_eq!(v.world_at(100.0, 50.0, &plot()), Some((-6.0, 2.0)));
    assert_eq!(v.world_at(300.0, 150.0, &plot()), Some((0.0, 0.0)));
    assert_eq!(v.world_at(99.0, 60.0, &plot()), None);
}

#[test]
fn apply_round_trips_through_chart_axes() {
    let mut chart = Chart::new();
    let v = ViewState::new((-1.0, 3.0), (-0.5, 0.5));
    v.apply_to_chart(&mut chart);
    assert_eq!(chart.view(), v);
}

#[test]
fn layout_splits_panel_and_plot() {
    let layout = Layout::default();
    assert_eq!(layout.panel().right, layout.chart().left);
    let plot = layout.plot();
    assert!(plot.left > layout.chart().left && plot.right < layout.width);
    assert!(plot.top > 0 && plot.bottom < layout.height);

    let tiny = layout.resized(10, 10);
    assert!(tiny.plot().width() >= 1 && tiny.plot().height() >= 1);
}

#[test]
fn repeated_zoom_stays_finite_and_bounded() {
    let mut v = ViewState::new((-6.0, 6.0), (-2.0, 2.0));
    for _ in 0..2_000 {
        v.zoom_at_pixel(0.9, 200.0, 100.0, &plot());
    }
    let (xs, ys) = (v.x_max - v.x_min, v.y_max - v.y_min);
    assert!(v.x_min.is_finite() && v.y_max.is_finite());
    assert!(xs > 0.0 && xs >= MIN_SPAN * 0.5, "x span {xs}");
    assert!(ys > 0.0 && ys >= MIN_SPAN * 0.5, "y span {ys}");
    assert!(v.world_at(200.0, 100.0, &plot()).is_some_and(|(x, y)| x.is_finite() && y.is_finite()));

    for _ in 0..2_000 {
        v.zoom_at_pixel(-9.0, 200.0, 100.0, &plot());
    }
    assert!(v.x_max - v.x_min <= MAX_SPAN * 1.000_001);
    assert!(v.x_min.is_finite() && v.x_max.is_finite());
}
