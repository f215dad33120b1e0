// File: crates/series-core/src/approx.rs
// Summary: Local polynomial (Taylor-like) approximation via interpolation on clustered nodes.
// Notes:
// - Nodes are Chebyshev-Lobatto points of the interval [x0 - |scale|, x0 + |scale|].
//   For odd orders the grid of the next even order is used without its last point,
//   so the expansion point itself is always a node and p(x0) == f(x0).
// - The Newton form is expanded into coefficients of (x - x0), so the result reads
//   like a truncated Taylor series.

use std::f64::consts::PI;

use crate::error::{Result, SeriesError};
use crate::params::ApproxParams;

/// Highest polynomial degree accepted by the fit.
pub const MAX_ORDER: u32 = 20;

/// Polynomial in powers of `(x - center)`; `coeffs[i]` multiplies `(x - center)^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct TaylorPolynomial {
    center: f64,
    coeffs: Vec<f64>,
}

impl TaylorPolynomial {
    pub fn new(center: f64, coeffs: Vec<f64>) -> Self {
        Self { center, coeffs }
    }

    pub fn center(&self) -> f64 { self.center }

    pub fn coefficients(&self) -> &[f64] { &self.coeffs }

    pub fn degree(&self) -> usize { self.coeffs.len().saturating_sub(1) }

    /// Horner evaluation at `x - center`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let t = x - self.center;
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }
}

/// Offsets from the expansion point at which the target is sampled.
fn node_offsets(order: u32, scale: f64) -> Vec<f64> {
    if order == 0 {
        return vec![0.0];
    }
    let m = order + order % 2;
    (0..=order)
        .map(|k| {
            if 2 * k == m {
                0.0
            } else {
                scale * (k as f64 * PI / m as f64).cos()
            }
        })
        .collect()
}

fn validate(expansion_point: f64, order: u32, scale: f64) -> Result<()> {
    if !expansion_point.is_finite() {
        return Err(SeriesError::InvalidParameter(format!(
            "expansion point must be finite, got {expansion_point}"
        )));
    }
    if scale == 0.0 || !scale.is_finite() {
        return Err(SeriesError::InvalidParameter(format!(
            "scale must be finite and non-zero, got {scale}"
        )));
    }
    if order > MAX_ORDER {
        return Err(SeriesError::InvalidParameter(format!(
            "order {order} exceeds maximum {MAX_ORDER}"
        )));
    }
    Ok(())
}

/// Fit the order-`order` polynomial approximation of `f` around `expansion_point`.
pub fn fit_taylor<F>(f: F, expansion_point: f64, order: u32, scale: f64) -> Result<TaylorPolynomial>
where
    F: Fn(f64) -> f64,
{
    validate(expansion_point, order, scale)?;

    let t = node_offsets(order, scale);
    let mut a = Vec::with_capacity(t.len());
    for &dt in &t {
        let x = expansion_point + dt;
        let y = f(x);
        if !y.is_finite() {
            return Err(SeriesError::InvalidParameter(format!(
                "target is not finite at x = {x}"
            )));
        }
        a.push(y);
    }

    // Divided differences, in place: a[i] becomes f[t0..=ti].
    let n = t.len();
    for j in 1..n {
        for i in (j..n).rev() {
            a[i] = (a[i] - a[i - 1]) / (t[i] - t[i - j]);
        }
    }

    // Newton form -> powers of t, innermost factor first.
    let mut coeffs = vec![a[n - 1]];
    for k in (0..n - 1).rev() {
        let mut next = vec![0.0; coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i + 1] += c;
            next[i] -= t[k] * c;
        }
        next[0] += a[k];
        coeffs = next;
    }

    Ok(TaylorPolynomial::new(expansion_point, coeffs))
}

/// Approximate `f` on every grid point; one output per input, same order.
pub fn approximate<F>(f: F, expansion_point: f64, order: u32, scale: f64, grid: &[f64]) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    let poly = fit_taylor(f, expansion_point, order, scale)?;
    Ok(grid.iter().map(|&x| poly.eval(x)).collect())
}

/// Approximation routine used by the controller on each tick.
pub trait Approximator {
    fn id(&self) -> &'static str;
    fn approximate(&self, f: &dyn Fn(f64) -> f64, params: &ApproxParams, grid: &[f64]) -> Result<Vec<f64>>;
}

/// Default approximator backed by [`fit_taylor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TaylorApproximator;

impl Approximator for TaylorApproximator {
    fn id(&self) -> &'static str { "taylor" }

    fn approximate(&self, f: &dyn Fn(f64) -> f64, params: &ApproxParams, grid: &[f64]) -> Result<Vec<f64>> {
        approximate(f, params.expansion_point, params.order, params.scale, grid)
    }
}
