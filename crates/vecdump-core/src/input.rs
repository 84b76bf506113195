// ABOUTME: Converts host-style numeric arguments into typed lengths and steps.
// ABOUTME: Rejects non-finite or negative values and lengths that overrun the buffer.

use thiserror::Error;

/// Errors raised while validating export arguments, before any file is touched.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("length must be non-negative, got {0}")]
    NegativeLength(f64),

    #[error("length must be finite, got {0}")]
    NonFiniteLength(f64),

    #[error("step must be non-negative, got {0}")]
    NegativeStep(f64),

    #[error("step must be finite, got {0}")]
    NonFiniteStep(f64),

    #[error("length {length} exceeds the {available} values available")]
    LengthExceedsBuffer { length: usize, available: usize },
}

/// Convert a length passed as a float into an element count, truncating
/// toward zero.
pub fn length_from_host(length: f64) -> Result<usize, InputError> {
    if !length.is_finite() {
        return Err(InputError::NonFiniteLength(length));
    }
    if length < 0.0 {
        return Err(InputError::NegativeLength(length));
    }
    Ok(length.trunc() as usize)
}

/// Convert a sampling step passed as a float into a counter threshold,
/// truncating toward zero.
pub fn step_from_host(step: f64) -> Result<usize, InputError> {
    if !step.is_finite() {
        return Err(InputError::NonFiniteStep(step));
    }
    if step < 0.0 {
        return Err(InputError::NegativeStep(step));
    }
    Ok(step.trunc() as usize)
}

/// Return the first `length` values, or an error when the slice is shorter.
pub fn checked_prefix(values: &[f64], length: usize) -> Result<&[f64], InputError> {
    values
        .get(..length)
        .ok_or(InputError::LengthExceedsBuffer {
            length,
            available: values.len(),
        })
}
