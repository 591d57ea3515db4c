use std::iter::Peekable;

use logos::{Logos, SpannedIter};

use crate::{ast::Expr, error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply parentheses and negations may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on the height of a parsed tree.
///
/// Evaluating, printing and dropping a tree recurse once per level, so this
/// also caps long flat chains such as `1 + 1 + ... + 1`.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 1024;

/// What the parser does with input left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop at the end of the expression and ignore the rest, so `2 + 3 x`
    /// parses as `2 + 3`.
    #[default]
    Ignore,
    /// Fail with [`ParseError::UnexpectedTrailingInput`].
    Reject,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of unconsumed input.
    pub trailing_input: TrailingInput,
    /// Maximum nesting of parentheses and prefix negations.
    pub max_depth:      usize,
    /// Maximum height of the resulting tree, counting every binary node on
    /// the path as well as each nesting level.
    pub max_tree_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { trailing_input: TrailingInput::Ignore,
               max_depth:      DEFAULT_MAX_DEPTH,
               max_tree_depth: DEFAULT_MAX_TREE_DEPTH, }
    }
}

/// A recursive-descent parser over a single source string.
///
/// The parser owns a cursor into the source and nothing else; it lives for
/// one call to [`Parser::parse`]. Tokens are pulled from the lexer one
/// lookahead at a time.
///
/// Grammar, lowest precedence first:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := primary (("*" | "/") primary)*
///     primary    := "-" primary
///                 | "(" expression ")"
///                 | "+"? NUMBER
/// ```
pub struct Parser<'src> {
    source:  &'src str,
    tokens:  Peekable<SpannedIter<'src, Token>>,
    options: ParseOptions,
    depth:   usize,
    height:  usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default [`ParseOptions`].
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Creates a parser with explicit options.
    #[must_use]
    pub fn with_options(source: &'src str, options: ParseOptions) -> Self {
        Self { source,
               tokens: Token::lexer(source).spanned().peekable(),
               options,
               depth: 0,
               height: 0 }
    }

    /// Parses the source into an expression tree.
    ///
    /// # Errors
    /// - `ExpectedNumber` if an operand is missing or malformed.
    /// - `ExpectedCloseParen` if a `(` is never closed.
    /// - `LiteralTooLarge` if a literal overflows `f64`.
    /// - `NestingTooDeep` if nesting exceeds [`ParseOptions::max_depth`].
    /// - `TreeTooDeep` if the tree would exceed
    ///   [`ParseOptions::max_tree_depth`].
    /// - `UnexpectedTrailingInput` if input remains and
    ///   [`TrailingInput::Reject`] is configured.
    ///
    /// # Example
    /// ```
    /// use exprcalc::interpreter::parser::core::{ParseOptions, Parser, TrailingInput};
    ///
    /// let tree = Parser::new("2 + 3 and more").parse().unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), 5.0);
    ///
    /// let strict = ParseOptions { trailing_input: TrailingInput::Reject,
    ///                             ..ParseOptions::default() };
    /// assert!(Parser::with_options("2 + 3 and more", strict).parse().is_err());
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> ParseResult<Expr> {
        tracing::trace!(source = self.source, "parsing");
        let result = self.parse_root();
        if let Err(e) = &result {
            tracing::debug!(error = %e, "parse failed");
        }
        result
    }

    fn parse_root(&mut self) -> ParseResult<Expr> {
        let root = self.parse_expression()?;

        if self.options.trailing_input == TrailingInput::Reject
           && let Some((_, span)) = self.tokens.next()
        {
            return Err(ParseError::UnexpectedTrailingInput { token:    self.source[span.clone()]
                                                                           .to_string(),
                                                             position: span.start, });
        }

        Ok(root)
    }

    /// Returns the next token without consuming it.
    ///
    /// `None` stands for the end of input and also for text the lexer does
    /// not recognize; neither can continue an expression.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&Token> {
        match self.tokens.peek() {
            Some((Ok(token), _)) => Some(token),
            _ => None,
        }
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<Token> {
        self.tokens.next().and_then(|(token, _)| token.ok())
    }

    /// Byte offset of the lookahead, or the source length at end of input.
    pub(in crate::interpreter::parser) fn position(&mut self) -> usize {
        self.tokens
            .peek()
            .map_or(self.source.len(), |(_, span)| span.start)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once the configured depth is reached.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.options.max_depth,
                                                    position: self.position(), });
        }
        let height = self.height;
        self.grow()?;
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        self.height = height;
        result
    }

    /// Charges one more tree level against [`ParseOptions::max_tree_depth`].
    ///
    /// Callers restore `height` once the subtree they are building is done.
    ///
    /// # Errors
    /// `TreeTooDeep` once the configured height is reached.
    pub(in crate::interpreter::parser) fn grow(&mut self) -> ParseResult<()> {
        if self.height >= self.options.max_tree_depth {
            return Err(ParseError::TreeTooDeep { limit:    self.options.max_tree_depth,
                                                 position: self.position(), });
        }
        self.height += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn height(&self) -> usize {
        self.height
    }

    pub(in crate::interpreter::parser) const fn restore_height(&mut self, height: usize) {
        self.height = height;
    }
}

/// Parses `source` with the default options.
///
/// Trailing input after a complete expression is ignored.
///
/// # Example
/// ```
/// use exprcalc::interpreter::parser::core::parse;
///
/// let tree = parse("13.75 + 22 * 15").unwrap();
/// assert_eq!(tree.evaluate().unwrap(), 343.75);
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(source).parse()
}
