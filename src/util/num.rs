use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// - `RuntimeError::DomainError` for non-finite, negative or fractional
///   values.
/// - `RuntimeError::Overflow` for values above `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use pratt::{RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0, 9).unwrap(), 7);
///
/// let err = f64_to_u64_checked(1.5, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::DomainError { position: 11, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, position: usize) -> EvalResult<u64> {
    if !value.is_finite() {
        return Err(RuntimeError::DomainError { details: format!("{value} is not finite"),
                                               position });
    }
    if value < 0.0 {
        return Err(RuntimeError::DomainError { details: format!("{value} is negative"),
                                               position });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::DomainError { details: format!("{value} is fractional"),
                                               position });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::Overflow { position });
    }
    Ok(value as u64)
}

/// Safely converts a non-negative `i64` to `u32`.
///
/// ## Errors
/// - `RuntimeError::DomainError` if the value is negative.
/// - `RuntimeError::Overflow` if the value exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use pratt::{RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { position: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, position: usize) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::DomainError { details: format!("{value} is negative"),
                                               position });
    }
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}
