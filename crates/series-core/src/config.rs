// File: crates/series-core/src/config.rs
// Summary: Explorer configuration with the reference defaults and validation.

use std::time::Duration;

use crate::approx::MAX_ORDER;
use crate::error::{Result, SeriesError};
use crate::params::ApproxParams;
use crate::widget::SliderSpec;

/// Sample grid request: `count` points over `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { low: -10.0, high: 10.0, count: 50 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
    pub title: &'static str,
    pub grid: GridSpec,
    pub order: SliderSpec,
    pub expansion_point: SliderSpec,
    /// Fixed for the session; not exposed as a widget.
    pub scale: f64,
    pub tick_period: Duration,
    /// Initial visible x range of the plot.
    pub x_range: (f64, f64),
    /// Initial visible y range of the plot.
    pub y_range: (f64, f64),
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "Series Approximation",
            grid: GridSpec::default(),
            order: SliderSpec::order(),
            expansion_point: SliderSpec::expansion_point(),
            scale: 0.5,
            tick_period: Duration::from_millis(100),
            x_range: (-6.0, 6.0),
            y_range: (-2.0, 2.0),
        }
    }
}

impl ExplorerConfig {
    /// Initial approximation parameters taken from the slider defaults.
    pub fn initial_params(&self) -> ApproxParams {
        ApproxParams::new(
            self.order.snap(self.order.value).round() as u32,
            self.expansion_point.snap(self.expansion_point.value),
            self.scale,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.grid;
        if !g.low.is_finite() || !g.high.is_finite() || g.low >= g.high || g.count < 2 {
            return Err(SeriesError::InvalidRange { low: g.low, high: g.high, count: g.count });
        }
        self.order.validate()?;
        self.expansion_point.validate()?;
        if self.order.start < 0.0 || self.order.end > MAX_ORDER as f64 || self.order.step.fract() != 0.0 {
            return Err(SeriesError::InvalidParameter(format!(
                "order slider must use whole steps within [0, {MAX_ORDER}]"
            )));
        }
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(SeriesError::InvalidParameter(format!("scale must be non-zero, got {}", self.scale)));
        }
        if self.tick_period.is_zero() {
            return Err(SeriesError::InvalidParameter("tick period must be positive".into()));
        }
        for (name, (lo, hi)) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(SeriesError::InvalidParameter(format!("{name} [{lo}, {hi}] is empty")));
            }
        }
        Ok(())
    }
}
