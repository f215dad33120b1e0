// File: crates/series-core/src/error.rs
// Summary: Error taxonomy for grid construction, approximation and widget input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Malformed sample grid request.
    #[error("invalid range: [{low}, {high}] with {count} points")]
    InvalidRange { low: f64, high: f64, count: usize },

    /// Approximation parameter outside the supported domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A widget value outside its declared bounds.
    #[error("{widget} value {value} outside [{min}, {max}]")]
    OutOfBounds { widget: &'static str, value: f64, min: f64, max: f64 },

    /// Column lengths disagree when replacing a display buffer.
    #[error("buffer '{name}' columns differ in length: x={x_len}, y={y_len}")]
    LengthMismatch { name: String, x_len: usize, y_len: usize },
}

pub type Result<T> = std::result::Result<T, SeriesError>;
