/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records `position`, the byte offset of the offending input.
/// When the input ran out, `position` equals the length of the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A primary position held neither a number, `-` nor `(`.
    #[error("Expected number at position {position}.")]
    ExpectedNumber {
        /// Byte offset where the number was expected.
        position: usize,
    },
    /// A parenthesized expression was not closed.
    #[error("Expected closing parenthesis ')' at position {position} but none found.")]
    ExpectedCloseParen {
        /// Byte offset where `)` was expected.
        position: usize,
    },
    /// Input remained after a complete expression and trailing input is
    /// rejected.
    #[error("Extra input after expression at position {position}: {token}")]
    UnexpectedTrailingInput {
        /// The first unconsumed lexeme.
        token:    String,
        /// Byte offset of that lexeme.
        position: usize,
    },
    /// A numeric literal does not fit in an `f64`.
    #[error("Literal at position {position} is too large.")]
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// Parentheses and negations nest deeper than the configured limit.
    #[error("Expression nests deeper than {limit} levels at position {position}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
    /// The tree would be taller than the configured limit, typically from a
    /// very long chain of binary operators.
    #[error("Expression is deeper than {limit} levels at position {position}.")]
    TreeTooDeep {
        /// The configured maximum tree height.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedNumber { position }
            | Self::ExpectedCloseParen { position }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::NestingTooDeep { position, .. }
            | Self::TreeTooDeep { position, .. } => *position,
        }
    }
}
