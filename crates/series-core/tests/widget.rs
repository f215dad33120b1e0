// File: crates/series-core/tests/widget.rs
// Purpose: Slider bounds, step snapping and change notifications.

use series_core::{ExplorerConfig, SeriesError, Slider, SliderChange, SliderId, SliderSpec};

#[test]
fn reference_sliders_match_declared_configuration() {
    let order = Slider::new(SliderId::Order, SliderSpec::order());
    assert_eq!(order.title(), "series order n");
    assert_eq!(order.value(), 2.0);
    assert_eq!((order.spec().start, order.spec().end, order.spec().step), (1.0, 10.0, 1.0));

    let x0 = Slider::new(SliderId::ExpansionPoint, SliderSpec::expansion_point());
    assert_eq!(x0.title(), "expansion point x_0");
    assert_eq!(x0.value(), 0.0);
    assert!((x0.fraction() - 0.5).abs() < 1e-12);
}

#[test]
fn drag_snaps_to_step_and_clamps() {
    let mut s = Slider::new(SliderId::ExpansionPoint, SliderSpec::expansion_point());
    let change = s.drag_to_fraction(0.66).unwrap();
    assert_eq!(change, SliderChange { id: SliderId::ExpansionPoint, old: 0.0, new: 0.3 });
    assert_eq!(s.drag_to_fraction(0.67), None);
    assert_eq!(s.drag_to_fraction(5.0).map(|c| c.new), Some(1.0));
    assert_eq!(s.drag_to_fraction(-3.0).map(|c| c.new), Some(-1.0));
    assert_eq!(s.drag_to_fraction(f64::NAN), None);
}

#[test]
fn set_value_rejects_out_of_bounds_and_keeps_value() {
    let mut s = Slider::new(SliderId::Order, SliderSpec::order());
    assert!(matches!(s.set_value(11.0), Err(SeriesError::OutOfBounds { max, .. }) if max == 10.0));
    assert!(s.set_value(0.0).is_err());
    assert_eq!(s.value(), 2.0);
    assert_eq!(s.set_value(2.0).unwrap(), None);
    assert_eq!(s.set_value(7.4).unwrap().map(|c| c.new), Some(7.0));
}

#[test]
fn step_by_saturates_at_bounds() {
    let mut s = Slider::new(SliderId::Order, SliderSpec::order());
    assert_eq!(s.step_by(3).map(|c| c.new), Some(5.0));
    assert_eq!(s.step_by(100).map(|c| c.new), Some(10.0));
    assert_eq!(s.step_by(1), None);
    assert_eq!(s.step_by(-100).map(|c| c.new), Some(1.0));
}

#[test]
fn default_configuration_is_valid_and_bad_sliders_are_not() {
    assert!(ExplorerConfig::default().validate().is_ok());

    let mut cfg = ExplorerConfig::default();
    cfg.order.end = 30.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ExplorerConfig::default();
    cfg.expansion_point.step = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ExplorerConfig::default();
    cfg.y_range = (2.0, -2.0);
    assert!(cfg.validate().is_err());
}
