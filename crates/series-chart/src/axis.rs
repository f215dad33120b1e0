// File: crates/series-chart/src/axis.rs
// Summary: Axis model with label, visible range and "nice" tick placement.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("x", -6.0, 6.0) }

    pub fn default_y() -> Self { Self::new("y", -2.0, 2.0) }

    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Tick step from the 1-2-5 sequence giving roughly `target` ticks.
    pub fn tick_step(&self, target: usize) -> f64 {
        let raw = self.span() / target.max(1) as f64;
        let exp = raw.log10().floor() as i32;
        let mag = 10f64.powi(exp);
        let norm = raw / mag;
        if norm < 1.5 {
            mag
        } else if norm < 3.0 {
            2.0 * mag
        } else if norm < 7.0 {
            5.0 * mag
        } else {
            10f64.powi(exp + 1)
        }
    }

    /// Tick values inside `[min, max]`, multiples of [`Axis::tick_step`].
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let step = self.tick_step(target);
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step).floor() as i64;
        (first..=last)
            .map(|i| {
                let v = i as f64 * step;
                // avoid printing "-0"
                if v == 0.0 { 0.0 } else { v }
            })
            .collect()
    }

    /// Label for a tick value, with just enough decimals for `step`.
    pub fn format_tick(value: f64, step: f64) -> String {
        let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
        format!("{value:.decimals$}")
    }
}
