/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// text: missing operands, unbalanced parentheses, oversized literals and
/// input left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an expression tree.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
