// File: crates/series-core/src/lib.rs
// Summary: Core library entry point; sampling, approximation and the tick-driven update protocol.

pub mod approx;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod params;
pub mod scheduler;
pub mod source;
pub mod widget;

pub use approx::{approximate, fit_taylor, Approximator, TaylorApproximator, TaylorPolynomial, MAX_ORDER};
pub use config::{ExplorerConfig, GridSpec};
pub use controller::{Controller, ControllerStats, TargetFn, TickOutcome};
pub use error::{Result, SeriesError};
pub use grid::{generate_grid, sample_curve};
pub use params::ApproxParams;
pub use scheduler::TickScheduler;
pub use source::DataSource;
pub use widget::{Slider, SliderChange, SliderId, SliderSpec};
