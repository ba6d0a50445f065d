//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT generation and serialization.
#[derive(Debug, Error)]
pub enum LutError {
    /// Lattice size below the minimum of 2 points per axis.
    ///
    /// A single-point lattice has no [0, 1] span to normalize over.
    #[error("invalid lattice size: {0} (must be at least 2)")]
    InvalidLatticeSize(usize),

    /// Sample buffer length does not match the declared size.
    #[error("expected {expected} samples for size {size}, got {actual}")]
    SampleCount {
        /// Declared lattice size per axis.
        size: usize,
        /// Expected number of samples (size cubed).
        expected: usize,
        /// Actual number of samples supplied.
        actual: usize,
    },

    /// Parse error when reading `.cube` text.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
