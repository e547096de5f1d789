use crate::{
    interpreter::{
        evaluator::{
            binary::{
                power::eval_pow,
                scalar::{eval_arithmetic, eval_div},
            },
            core::EvalResult,
        },
        value::Number,
    },
    operator::InfixOperator,
};

/// Evaluates an infix operation between two numbers.
///
/// Routes each operator to its implementation: [`eval_pow`] for `**`,
/// [`eval_div`] for `/` and [`eval_arithmetic`] for the checked `+`, `-` and
/// `*`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, used for error reporting.
///
/// # Example
/// ```
/// use pratt::{
///     Number,
///     interpreter::evaluator::binary::core::eval_binary,
///     operator::InfixOperator,
/// };
///
/// let result = eval_binary(InfixOperator::Add, Number::Integer(3), Number::Integer(4), 1);
/// assert_eq!(result.unwrap(), 7);
/// ```
pub fn eval_binary(op: InfixOperator,
                   left: Number,
                   right: Number,
                   position: usize)
                   -> EvalResult<Number> {
    match op {
        InfixOperator::Add => eval_arithmetic(left, right, i64::checked_add, |l, r| l + r, position),
        InfixOperator::Sub => eval_arithmetic(left, right, i64::checked_sub, |l, r| l - r, position),
        InfixOperator::Mul => eval_arithmetic(left, right, i64::checked_mul, |l, r| l * r, position),
        InfixOperator::Div => eval_div(left, right, position),
        InfixOperator::Pow => eval_pow(left, right, position),
    }
}
