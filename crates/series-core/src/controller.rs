// File: crates/series-core/src/controller.rs
// Summary: Interactive controller: owns parameters and display buffers, applies widget changes,
//          recomputes and republishes on each tick.

use tracing::{debug, info, warn};

use crate::approx::{Approximator, TaylorApproximator};
use crate::config::ExplorerConfig;
use crate::error::{Result, SeriesError};
use crate::grid::{generate_grid, sample_curve};
use crate::params::ApproxParams;
use crate::source::DataSource;
use crate::widget::{SliderChange, SliderId, SliderSpec};

pub type TargetFn = fn(f64) -> f64;

pub const TARGET_SOURCE: &str = "target";
pub const APPROX_SOURCE: &str = "approximation";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Published,
    Skipped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerStats {
    pub ticks: u64,
    pub recomputes: u64,
    pub skipped: u64,
    pub widget_changes: u64,
    pub rejected: u64,
}

/// Owns the approximation parameters and the two display buffers.
///
/// Threading contract: single writer, one reader at a time. Widget handlers
/// and ticks must run to completion on the same thread (the host event
/// loop), which is why `params` carries no lock. A host that dispatches
/// handlers from several threads must wrap the controller in a mutex or feed
/// it through a channel.
pub struct Controller<A: Approximator = TaylorApproximator> {
    target: TargetFn,
    approximator: A,
    grid: Vec<f64>,
    target_y: Vec<f64>,
    params: ApproxParams,
    order_spec: SliderSpec,
    expansion_spec: SliderSpec,
    target_source: DataSource,
    approx_source: DataSource,
    stats: ControllerStats,
}

impl Controller<TaylorApproximator> {
    pub fn new(config: &ExplorerConfig, target: TargetFn) -> Result<Self> {
        Self::with_approximator(config, target, TaylorApproximator)
    }
}

impl<A: Approximator> Controller<A> {
    /// Build the grid and target curve once and publish the initial approximation.
    pub fn with_approximator(config: &ExplorerConfig, target: TargetFn, approximator: A) -> Result<Self> {
        config.validate()?;
        let grid = generate_grid(config.grid.low, config.grid.high, config.grid.count)?;
        let target_y = sample_curve(target, &grid).into_iter().map(|(_, y)| y).collect();

        let mut controller = Self {
            target,
            approximator,
            grid,
            target_y,
            params: config.initial_params(),
            order_spec: config.order,
            expansion_spec: config.expansion_point,
            target_source: DataSource::new(TARGET_SOURCE),
            approx_source: DataSource::new(APPROX_SOURCE),
            stats: ControllerStats::default(),
        };
        controller.recompute()?;
        info!(
            approximator = controller.approximator.id(),
            points = controller.grid.len(),
            order = controller.params.order,
            x0 = controller.params.expansion_point,
            "controller ready"
        );
        Ok(controller)
    }

    pub fn params(&self) -> &ApproxParams { &self.params }
    pub fn grid(&self) -> &[f64] { &self.grid }
    pub fn stats(&self) -> ControllerStats { self.stats }
    pub fn target_source(&self) -> &DataSource { &self.target_source }
    pub fn approximation_source(&self) -> &DataSource { &self.approx_source }
    pub fn approximator(&self) -> &A { &self.approximator }

    /// Write one widget value into the parameters. Nothing is recomputed here;
    /// the change becomes visible on the next tick.
    pub fn on_widget_change(&mut self, which: SliderId, value: f64) -> Result<()> {
        match self.apply_widget_value(which, value) {
            Ok(()) => {
                self.stats.widget_changes += 1;
                debug!(widget = which.name(), value, "parameter updated");
                Ok(())
            }
            Err(e) => {
                self.stats.rejected += 1;
                warn!(widget = which.name(), value, error = %e, "rejected widget value");
                Err(e)
            }
        }
    }

    /// Convenience for forwarding a slider notification.
    pub fn on_slider_change(&mut self, change: SliderChange) -> Result<()> {
        self.on_widget_change(change.id, change.new)
    }

    fn apply_widget_value(&mut self, which: SliderId, value: f64) -> Result<()> {
        match which {
            SliderId::Order => {
                let v = self.order_spec.check(which.name(), value)?;
                if (v - v.round()).abs() > 1e-9 {
                    return Err(SeriesError::InvalidParameter(format!("order must be a whole number, got {value}")));
                }
                self.params.order = v.round() as u32;
            }
            SliderId::ExpansionPoint => {
                self.params.expansion_point = self.expansion_spec.check(which.name(), value)?;
            }
        }
        Ok(())
    }

    /// Periodic handler. A failed recomputation is logged and the tick skipped;
    /// the previously published curves stay in place.
    pub fn on_tick(&mut self) -> TickOutcome {
        self.stats.ticks += 1;
        match self.recompute() {
            Ok(()) => {
                debug!(tick = self.stats.ticks, order = self.params.order, x0 = self.params.expansion_point, "published");
                TickOutcome::Published
            }
            Err(e) => {
                self.stats.skipped += 1;
                warn!(tick = self.stats.ticks, error = %e, "skipping tick");
                TickOutcome::Skipped
            }
        }
    }

    /// Recompute the approximation from the current parameters and replace both buffers.
    pub fn recompute(&mut self) -> Result<()> {
        let ys = self.approximator.approximate(&self.target, &self.params, &self.grid)?;
        self.approx_source.replace(self.grid.clone(), ys)?;
        // Immutable, but re-supplied so both buffers always share a revision.
        self.target_source.replace(self.grid.clone(), self.target_y.clone())?;
        self.stats.recomputes += 1;
        Ok(())
    }
}
