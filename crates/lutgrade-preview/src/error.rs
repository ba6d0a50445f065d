//! Preview error types.

use thiserror::Error;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Errors that can occur while rendering a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Buffer length does not match the declared image dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}
