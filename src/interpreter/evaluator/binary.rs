use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Combines two already evaluated operands.
///
/// Division checks its divisor with exact equality: any divisor equal to
/// `0.0` (including `-0.0`) fails, while tiny non-zero divisors divide
/// normally.
///
/// # Errors
/// `RuntimeError::DivisionByZero` when `op` is `Div` and `right == 0.0`.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::BinaryOperator, error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 10.0, 6.0), Ok(4.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, -0.0),
///            Err(RuntimeError::DivisionByZero));
/// ```
#[allow(clippy::float_cmp)]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
