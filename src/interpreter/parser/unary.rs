use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "-" primary
    ///              | "(" expression ")"
    ///              | "+"? NUMBER
    /// ```
    /// Negation is right-recursive and binds tighter than any binary
    /// operator, so `--4` is `4` and `-2 * 3` is `(-2) * 3`. A `+` in this
    /// position is a sign and must touch its number: `2 * +3` is `6`, while
    /// `+ 3`, `+(3)` and a lone `+` are errors.
    ///
    /// # Errors
    /// `ExpectedNumber` when the lookahead starts none of the alternatives,
    /// including at end of input.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek().cloned() {
            Some(Token::Minus) => self.parse_negation(),
            Some(Token::LParen) => self.parse_grouping(),
            Some(Token::Number(_)) => self.parse_literal(),
            Some(Token::Plus) => self.parse_signed_literal(),
            _ => Err(ParseError::ExpectedNumber { position: self.position() }),
        }
    }

    fn parse_negation(&mut self) -> ParseResult<Expr> {
        self.advance();
        let operand = self.nested(Self::parse_primary)?;
        Ok(Expr::negate(operand))
    }

    /// Parses `"(" expression ")"`.
    ///
    /// The parentheses only group; no node is created for them.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.advance();
        let inner = self.nested(Self::parse_expression)?;
        if matches!(self.peek(), Some(Token::RParen)) {
            self.advance();
            Ok(inner)
        } else {
            Err(ParseError::ExpectedCloseParen { position: self.position() })
        }
    }

    fn parse_signed_literal(&mut self) -> ParseResult<Expr> {
        let sign = self.position();
        self.advance();
        if self.position() == sign + 1 && matches!(self.peek(), Some(Token::Number(_))) {
            self.parse_literal()
        } else {
            Err(ParseError::ExpectedNumber { position: sign })
        }
    }

    fn parse_literal(&mut self) -> ParseResult<Expr> {
        let position = self.position();
        match self.advance() {
            Some(Token::Number(value)) if value.is_finite() => Ok(Expr::constant(value)),
            Some(Token::Number(_)) => Err(ParseError::LiteralTooLarge { position }),
            _ => Err(ParseError::ExpectedNumber { position }),
        }
    }
}
