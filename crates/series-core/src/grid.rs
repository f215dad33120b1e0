// File: crates/series-core/src/grid.rs
// Summary: Sample grid generation and one-shot curve sampling.

use crate::error::{Result, SeriesError};

/// Evenly spaced values over `[low, high]`, both endpoints included.
///
/// The last element is pinned to `high` so accumulated rounding never
/// shortens the range.
pub fn generate_grid(low: f64, high: f64, count: usize) -> Result<Vec<f64>> {
    if !low.is_finite() || !high.is_finite() || low >= high || count < 2 {
        return Err(SeriesError::InvalidRange { low, high, count });
    }
    let step = (high - low) / (count as f64 - 1.0);
    let mut out: Vec<f64> = (0..count).map(|i| low + step * i as f64).collect();
    out[count - 1] = high;
    Ok(out)
}

/// Evaluate `f` at every grid point, pairing each x with its value.
pub fn sample_curve<F: Fn(f64) -> f64>(f: F, grid: &[f64]) -> Vec<(f64, f64)> {
    grid.iter().map(|&x| (x, f(x))).collect()
}
