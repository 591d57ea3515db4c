use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_negate},
        parser::core::parse,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree and returns its value.
    ///
    /// Children are evaluated before their parent. A `Divide` node evaluates
    /// its divisor first and stops the whole evaluation if it is zero; no
    /// partial result is produced. The tree is not modified, so evaluating it
    /// again yields the same outcome.
    ///
    /// # Errors
    /// `RuntimeError::DivisionByZero` if any divisor evaluates to `0.0`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::{ast::Expr, error::RuntimeError};
    ///
    /// let ok = Expr::add(Expr::divide(Expr::constant(10.0), Expr::constant(2.0)),
    ///                    Expr::constant(5.0));
    /// assert_eq!(ok.evaluate(), Ok(10.0));
    ///
    /// let bad = Expr::divide(Expr::constant(10.0), Expr::constant(0.0));
    /// assert_eq!(bad.evaluate(), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Constant { value } => Ok(*value),
            Self::Negate { operand } => Ok(eval_negate(operand.evaluate()?)),
            Self::Divide { left, right } => {
                let divisor = right.evaluate()?;
                let dividend = left.evaluate()?;
                eval_binary(BinaryOperator::Div, dividend, divisor)
            },
            Self::Add { left, right } => Self::eval_in_order(BinaryOperator::Add, left, right),
            Self::Subtract { left, right } => Self::eval_in_order(BinaryOperator::Sub, left, right),
            Self::Multiply { left, right } => Self::eval_in_order(BinaryOperator::Mul, left, right),
        }
    }

    fn eval_in_order(op: BinaryOperator, left: &Self, right: &Self) -> EvalResult<f64> {
        let left = left.evaluate()?;
        let right = right.evaluate()?;
        eval_binary(op, left, right)
    }
}

/// Evaluates `expr`, logging failures.
///
/// # Errors
/// `RuntimeError::DivisionByZero` if any divisor evaluates to `0.0`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let result = expr.evaluate();
    match &result {
        Ok(value) => tracing::trace!(value, "evaluated"),
        Err(e) => tracing::debug!(error = %e, "evaluation failed"),
    }
    result
}

/// Parses `source` with the default options and evaluates the tree.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed input and [`Error::Runtime`] when
/// evaluation fails.
///
/// # Example
/// ```
/// use exprcalc::interpreter::evaluator::core::calculate;
///
/// assert_eq!(calculate("-(3 + 1) * 2").unwrap(), -8.0);
/// assert!(calculate("1 / (2 - 2)").is_err());
/// ```
pub fn calculate(source: &str) -> Result<f64, Error> {
    let tree = parse(source)?;
    Ok(evaluate(&tree)?)
}
