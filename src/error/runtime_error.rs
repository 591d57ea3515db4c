/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The divisor of a division evaluated to exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
