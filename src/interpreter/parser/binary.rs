use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
    /// is `(8 - 3) - 2`. Every folded node deepens the left spine by one,
    /// and is charged against the tree height limit.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let height = self.height();
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = self.peek().and_then(token_to_binary_operator)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance();
                self.grow()?;
                let right = self.parse_term()?;
                left = Expr::binary(op, left, right);
                continue;
            }
            break;
        }
        self.restore_height(height);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`.
    ///
    /// The rule is: `term := primary (("*" | "/") primary)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        let height = self.height();
        let mut left = self.parse_primary()?;
        loop {
            if let Some(op) = self.peek().and_then(token_to_binary_operator)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                self.advance();
                self.grow()?;
                let right = self.parse_primary()?;
                left = Expr::binary(op, left, right);
                continue;
            }
            break;
        }
        self.restore_height(height);
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
