use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, real_result},
        value::Number,
    },
};

/// Evaluates addition, subtraction or multiplication.
///
/// Two integers are combined with `checked`, so an `i64` overflow is reported
/// instead of wrapping. Any other operand pair is promoted to reals and
/// combined with `real`.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `checked`: The integer operation, returning `None` on overflow.
/// - `real`: The same operation on reals.
/// - `position`: Byte offset of the operator, used for error reporting.
///
/// # Example
/// ```
/// use pratt::{Number, interpreter::evaluator::binary::scalar::eval_arithmetic};
///
/// let sum = eval_arithmetic(Number::Integer(3), Number::Integer(4), i64::checked_add, |l, r| l + r, 1);
/// assert_eq!(sum.unwrap(), Number::Integer(7));
///
/// let product = eval_arithmetic(Number::Real(1.5), Number::Integer(2), i64::checked_mul, |l, r| l * r, 1);
/// assert_eq!(product.unwrap(), 3);
/// ```
pub fn eval_arithmetic(left: Number,
                       right: Number,
                       checked: impl Fn(i64, i64) -> Option<i64>,
                       real: impl Fn(f64, f64) -> f64,
                       position: usize)
                       -> EvalResult<Number> {
    if let (Number::Integer(a), Number::Integer(b)) = (left, right) {
        return checked(a, b).map(Number::Integer)
                            .ok_or(RuntimeError::Overflow { position });
    }

    let (l, r) = left.promote_to_real(right);
    real_result(real(l, r), position)
}

/// Evaluates a division.
///
/// Division always produces a real, even when the quotient is whole, and
/// integers too large to be exact as reals are rounded first. A zero divisor,
/// integer or real, is a division by zero.
///
/// # Example
/// ```
/// use pratt::{Number, RuntimeError, interpreter::evaluator::binary::scalar::eval_div};
///
/// assert_eq!(eval_div(Number::Integer(3), Number::Integer(2), 1).unwrap(), 1.5);
/// assert_eq!(eval_div(Number::Integer(10_000_000_000_000_000), Number::Integer(2), 1).unwrap(),
///            5e15);
/// assert!(matches!(eval_div(Number::Integer(1), Number::Real(0.0), 1),
///                  Err(RuntimeError::DivisionByZero { position: 1 })));
/// ```
pub fn eval_div(left: Number, right: Number, position: usize) -> EvalResult<Number> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }

    let (l, r) = left.promote_to_real(right);
    real_result(l / r, position)
}
