//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum GaugeError {
    /// Raised when a gauge number falls outside the supported 0-40 range.
    #[error("value out of range [0-40]: {value}")]
    OutOfRange {
        /// The rejected input as entered.
        value: String,
    },
    /// Raised when a direct gauge entry has a fractional part.
    #[error("gauge must be a whole number, got {0}")]
    NotWholeNumber(Scalar),
    /// Raised when a form field name is not recognised.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// Raised when the display configuration cannot be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
    /// Wraps I/O failures of an interactive session.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying [`GaugeError`].
pub type Result<T> = std::result::Result<T, GaugeError>;
