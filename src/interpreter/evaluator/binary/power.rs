use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, real_result},
        value::Number,
    },
    util::num::i64_to_u32_checked,
};

/// Evaluates an exponentiation operation.
///
/// Integer–integer exponentiation with a non-negative exponent uses checked
/// arithmetic and stays an integer. Negative integer exponents and real
/// operands are computed in floating-point form with `powf`.
///
/// Bases `0`, `1` and `-1` have results that fit any exponent, so they are
/// answered directly instead of through `checked_pow`.
///
/// Raising zero to a negative power is a division by zero. A negative base
/// with a fractional exponent has no real result and is a domain error.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `position`: Byte offset of the operator, used for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the result of `base ** exponent`.
///
/// # Example
/// ```
/// use pratt::{Number, interpreter::evaluator::binary::power::eval_pow};
///
/// let result = eval_pow(Number::Integer(2), Number::Integer(10), 1).unwrap();
/// assert_eq!(result, Number::Integer(1024));
///
/// let result = eval_pow(Number::Integer(2), Number::Integer(-1), 1).unwrap();
/// assert_eq!(result, 0.5);
///
/// let result = eval_pow(Number::Integer(-1), Number::Integer(5_000_000_001), 1).unwrap();
/// assert_eq!(result, Number::Integer(-1));
/// ```
pub fn eval_pow(base: Number, exponent: Number, position: usize) -> EvalResult<Number> {
    if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
       && e >= 0
    {
        match b {
            0 => return Ok(Number::Integer(i64::from(e == 0))),
            1 => return Ok(Number::Integer(1)),
            -1 => return Ok(Number::Integer(if e % 2 == 0 { 1 } else { -1 })),
            _ => {},
        }
        return b.checked_pow(i64_to_u32_checked(e, position)?)
                .map(Number::Integer)
                .ok_or(RuntimeError::Overflow { position });
    }

    let (b, e) = base.promote_to_real(exponent);
    if b == 0.0 && e < 0.0 {
        return Err(RuntimeError::DivisionByZero { position });
    }

    let result = b.powf(e);
    if result.is_nan() {
        return Err(RuntimeError::DomainError { details: format!("{base} ** {exponent} has no real result"),
                                               position });
    }
    real_result(result, position)
}
