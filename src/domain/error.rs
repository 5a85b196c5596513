//! Domain error types

use thiserror::Error;

/// Errors that can occur while generating, combining or filtering waves
#[derive(Error, Debug)]
pub enum WaveError {
    /// Invalid construction parameters (non-positive rate, cutoff, duration...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two waves that must line up sample-for-sample do not
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Division error: {0}")]
    Division(String),

    /// Reading a run profile failed (filesystem or JSON)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for wave operations
pub type WaveResult<T> = Result<T, WaveError>;

/// Reject zero, negative, NaN and infinite values for a named parameter
pub(crate) fn ensure_positive(what: &str, value: f64) -> WaveResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WaveError::Config(format!("{what} must be positive, got {value}")))
    }
}
