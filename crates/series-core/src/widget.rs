// File: crates/series-core/src/widget.rs
// Summary: Slider model with declared bounds, step snapping and change notifications.

use crate::error::{Result, SeriesError};

/// Tolerance for bound checks on stepped decimal values (e.g. 0.1 increments).
const BOUND_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderId {
    Order,
    ExpansionPoint,
}

impl SliderId {
    pub fn name(&self) -> &'static str {
        match self {
            SliderId::Order => "order",
            SliderId::ExpansionPoint => "expansion_point",
        }
    }
}

/// Declared slider configuration: title, bounds, step and initial value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub title: &'static str,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub value: f64,
}

impl SliderSpec {
    pub fn order() -> Self {
        Self { title: "series order n", start: 1.0, end: 10.0, step: 1.0, value: 2.0 }
    }

    pub fn expansion_point() -> Self {
        Self { title: "expansion point x_0", start: -1.0, end: 1.0, step: 0.1, value: 0.0 }
    }

    pub fn contains(&self, v: f64) -> bool {
        v.is_finite() && v >= self.start - BOUND_EPS && v <= self.end + BOUND_EPS
    }

    /// Reject values outside the declared bounds.
    pub fn check(&self, widget: &'static str, v: f64) -> Result<f64> {
        if self.contains(v) {
            Ok(v.clamp(self.start, self.end))
        } else {
            Err(SeriesError::OutOfBounds { widget, value: v, min: self.start, max: self.end })
        }
    }

    /// Clamp into bounds and round to the nearest step from `start`.
    pub fn snap(&self, v: f64) -> f64 {
        let v = v.clamp(self.start, self.end);
        let steps = ((v - self.start) / self.step).round();
        let snapped = (self.start + steps * self.step).clamp(self.start, self.end);
        // strip binary noise from decimal steps (-1.0 + 13 * 0.1 -> 0.3)
        (snapped * 1e9).round() / 1e9
    }

    pub fn validate(&self) -> Result<()> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start < self.end
            && self.step > 0.0
            && self.step <= self.end - self.start
            && self.contains(self.value);
        if ok {
            Ok(())
        } else {
            Err(SeriesError::InvalidParameter(format!(
                "slider '{}' has bounds [{}, {}] step {} value {}",
                self.title, self.start, self.end, self.step, self.value
            )))
        }
    }
}

/// Notification emitted when a slider's value actually changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderChange {
    pub id: SliderId,
    pub old: f64,
    pub new: f64,
}

#[derive(Clone, Debug)]
pub struct Slider {
    id: SliderId,
    spec: SliderSpec,
    value: f64,
}

impl Slider {
    pub fn new(id: SliderId, spec: SliderSpec) -> Self {
        Self { id, value: spec.snap(spec.value), spec }
    }

    pub fn id(&self) -> SliderId { self.id }
    pub fn title(&self) -> &'static str { self.spec.title }
    pub fn value(&self) -> f64 { self.value }
    pub fn spec(&self) -> &SliderSpec { &self.spec }

    /// Position of the current value along the track, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        ((self.value - self.spec.start) / (self.spec.end - self.spec.start)).clamp(0.0, 1.0)
    }

    /// Programmatic set. Out-of-bounds requests are rejected and leave the value untouched.
    pub fn set_value(&mut self, v: f64) -> Result<Option<SliderChange>> {
        let v = self.spec.check(self.id.name(), v)?;
        Ok(self.apply(self.spec.snap(v)))
    }

    /// Pointer drag along the track; the pointer may leave the track, so clamp.
    pub fn drag_to_fraction(&mut self, fraction: f64) -> Option<SliderChange> {
        let f = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { return None };
        let raw = self.spec.start + f * (self.spec.end - self.spec.start);
        self.apply(self.spec.snap(raw))
    }

    /// Move by whole steps (keyboard nudging), saturating at the bounds.
    pub fn step_by(&mut self, steps: i32) -> Option<SliderChange> {
        let raw = self.value + steps as f64 * self.spec.step;
        self.apply(self.spec.snap(raw))
    }

    fn apply(&mut self, new: f64) -> Option<SliderChange> {
        if (new - self.value).abs() < BOUND_EPS {
            return None;
        }
        let old = self.value;
        self.value = new;
        Some(SliderChange { id: self.id, old, new })
    }
}
