// File: crates/series-core/src/source.rs
// Summary: Named column buffers observed by the display layer; replaced wholesale, never patched.

use crate::error::{Result, SeriesError};

#[derive(Clone, Debug)]
pub struct DataSource {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    revision: u64,
}

impl DataSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), x: Vec::new(), y: Vec::new(), revision: 0 }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Bumped on every successful replacement; lets observers skip unchanged frames.
    pub fn revision(&self) -> u64 { self.revision }

    /// Swap in new columns. Lengths must agree; on error the old contents stay.
    pub fn replace(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<()> {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                name: self.name.clone(),
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        self.x = x;
        self.y = y;
        self.revision += 1;
        Ok(())
    }

    /// Zip the columns into `(x, y)` points for rendering.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}
