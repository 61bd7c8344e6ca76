//! Base error type.
//!
//! Sub-crates define their own error enums; `park-sim` wraps them all so a
//! failed setup surfaces as a single descriptive error.

use thiserror::Error;

/// Errors raised while validating core configuration values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{what} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        what:  &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

/// Shorthand result type for `park-core`.
pub type CoreResult<T> = Result<T, CoreError>;
