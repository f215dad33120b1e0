// File: crates/series-core/src/params.rs
// Summary: Adjustable approximation parameters owned by the controller.

/// Order and expansion point are user-adjustable; scale is fixed for the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxParams {
    pub order: u32,
    pub expansion_point: f64,
    pub scale: f64,
}

impl ApproxParams {
    pub const fn new(order: u32, expansion_point: f64, scale: f64) -> Self {
        Self { order, expansion_point, scale }
    }
}

impl Default for ApproxParams {
    fn default() -> Self {
        Self::new(2, 0.0, 0.5)
    }
}
