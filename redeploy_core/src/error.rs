//! Input validation errors

use thiserror::Error;

/// Reasons a calculation input was rejected
///
/// Calculation entry points never return this directly. They convert it
/// into a zeroed or error-flagged result so callers always get a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unsupported unit cost: {0}")]
    InvalidCost(f64),
    #[error("character HP must be greater than zero")]
    ZeroHp,
}

/// Reject NaN and infinities
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { field, value })
    }
}
