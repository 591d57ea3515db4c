/// The evaluator module computes the value of expression trees.
///
/// Evaluation is a pure post-order fold: children first, then the node's own
/// operator. Division by zero is the only failure.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw text and produces numbers, operators and
/// parentheses, skipping whitespace.
pub mod lexer;
/// The parser module builds expression trees from source text.
///
/// A recursive-descent parser over three precedence levels (expression, term,
/// primary) that pulls tokens lazily from the lexer.
pub mod parser;
