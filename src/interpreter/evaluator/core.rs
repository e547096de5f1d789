use crate::{error::RuntimeError, interpreter::value::Number};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Wraps the outcome of a floating-point operation.
///
/// A NaN has no meaning as a result and is reported as a domain error; an
/// infinite result means the operation overflowed.
///
/// # Example
/// ```
/// use pratt::{RuntimeError, interpreter::evaluator::core::real_result};
///
/// assert_eq!(real_result(0.5, 0).unwrap(), 0.5);
/// assert!(matches!(real_result(f64::INFINITY, 3), Err(RuntimeError::Overflow { position: 3 })));
/// ```
pub fn real_result(value: f64, position: usize) -> EvalResult<Number> {
    if value.is_nan() {
        return Err(RuntimeError::DomainError { details: "result is not a real number".to_string(),
                                               position });
    }
    if value.is_infinite() {
        return Err(RuntimeError::Overflow { position });
    }
    Ok(Number::Real(value))
}
