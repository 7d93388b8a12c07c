//! Core error types.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating configuration or reading roster data.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid utilization threshold: {0} (must be finite and >= 0)")]
    InvalidThreshold(f64),

    #[error("unsupported roster format: {0}")]
    UnsupportedFormat(String),

    #[error("roster parse error: {0}")]
    Parse(String),
}
