use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::scalar::eval_div, core::EvalResult},
        value::Number,
    },
    operator::{PostfixOperator, PrefixOperator},
    util::num::f64_to_u64_checked,
};

/// Evaluates a prefix operation on a number.
///
/// Supported operators:
/// - `Identity`: returns the operand unchanged.
/// - `Negate`: numeric negation, checked for integers.
/// - `Reciprocal`: `1 / operand`, with the same division-by-zero check as `/`.
///
/// # Parameters
/// - `op`: Prefix operator.
/// - `operand`: Input value.
/// - `position`: Byte offset of the operator, used for error reporting.
///
/// # Example
/// ```
/// use pratt::{Number, interpreter::evaluator::unary::eval_prefix, operator::PrefixOperator};
///
/// let v = eval_prefix(PrefixOperator::Negate, Number::Integer(5), 0).unwrap();
/// assert_eq!(v, Number::Integer(-5));
///
/// let v = eval_prefix(PrefixOperator::Reciprocal, Number::Integer(4), 0).unwrap();
/// assert_eq!(v, 0.25);
/// ```
pub fn eval_prefix(op: PrefixOperator, operand: Number, position: usize) -> EvalResult<Number> {
    match op {
        PrefixOperator::Identity => Ok(operand),
        PrefixOperator::Negate => match operand {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(RuntimeError::Overflow { position }),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
        PrefixOperator::Reciprocal => eval_div(Number::Integer(1), operand, position),
    }
}

/// Evaluates a postfix operation on a number.
///
/// The only postfix operator is the factorial. It is defined for
/// non-negative integers and for reals without a fractional part; the result
/// is always an integer.
///
/// # Errors
/// - `RuntimeError::DomainError` for negative or fractional operands.
/// - `RuntimeError::Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use pratt::{Number, interpreter::evaluator::unary::eval_postfix, operator::PostfixOperator};
///
/// let v = eval_postfix(PostfixOperator::Factorial, Number::Integer(4), 1).unwrap();
/// assert_eq!(v, Number::Integer(24));
/// assert!(eval_postfix(PostfixOperator::Factorial, Number::Integer(-1), 1).is_err());
/// ```
pub fn eval_postfix(op: PostfixOperator, operand: Number, position: usize) -> EvalResult<Number> {
    match op {
        PostfixOperator::Factorial => factorial(operand, position),
    }
}

fn factorial(operand: Number, position: usize) -> EvalResult<Number> {
    let n = match operand {
        Number::Integer(n) if n < 0 => {
            return Err(RuntimeError::DomainError { details: format!("Factorial not defined for negative integer {n}"),
                                                   position });
        },
        Number::Integer(n) => n.unsigned_abs(),
        Number::Real(x) if !operand.is_integral() || x < 0.0 => {
            return Err(RuntimeError::DomainError { details: format!("Factorial not defined for {x}"),
                                                   position });
        },
        Number::Real(x) => f64_to_u64_checked(x, position)?,
    };

    (2..=n).try_fold(1_i64, |acc, k| i64::try_from(k).ok().and_then(|k| acc.checked_mul(k)))
           .map(Number::Integer)
           .ok_or(RuntimeError::Overflow { position })
}
