//! # exprcalc
//!
//! exprcalc builds and evaluates arithmetic expression trees.
//! Trees are either constructed directly through [`ast::Expr`] or parsed
//! from infix text such as `2 * (3 + 4)` by a recursive-descent parser that
//! honors precedence, parentheses and prefix negation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree.
///
/// This module declares the `Expr` enum, a closed set of arithmetic nodes in
/// which every composite exclusively owns its children, together with the
/// `BinaryOperator` tags the parser and evaluator share.
///
/// # Responsibilities
/// - Defines the node variants and their constructors.
/// - Renders trees back to infix text.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed source text, with byte positions.
/// - Defines `RuntimeError` for failures during evaluation.
/// - Combines both into `Error` for callers that parse and evaluate in one go.
pub mod error;
/// Turns source text into values.
///
/// This module ties together the lexer, the parser and the evaluator.
///
/// # Responsibilities
/// - Tokenizes source text lazily.
/// - Parses tokens into expression trees.
/// - Evaluates expression trees.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, calculate, evaluate},
        parser::core::{
            DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH, ParseOptions, ParseResult, Parser,
            TrailingInput, parse,
        },
    },
};

/// Evaluates every non-blank line of `source` and reports each outcome.
///
/// Each line is parsed with `options` and evaluated on its own. The result
/// for a line is written as `<input> = <value>` or `Error: <message>`; a
/// failing line does not stop the following ones.
///
/// # Returns
/// The number of lines that failed.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Examples
/// ```
/// use exprcalc::{ParseOptions, run_lines};
///
/// let mut out = Vec::new();
/// let failures = run_lines("2 * (3 + 4)\n10 / 0\n", ParseOptions::default(), &mut out).unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "2 * (3 + 4) = 14\nError: Division by zero.\n");
/// ```
pub fn run_lines(source: &str,
                 options: ParseOptions,
                 out: &mut impl std::io::Write)
                 -> std::io::Result<usize> {
    let mut failures = 0;

    for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let result = Parser::with_options(line, options).parse()
                                                        .map_err(Error::from)
                                                        .and_then(|tree| {
                                                            evaluate(&tree).map_err(Error::from)
                                                        });
        match result {
            Ok(value) => writeln!(out, "{line} = {value}")?,
            Err(e) => {
                failures += 1;
                writeln!(out, "Error: {e}")?;
            },
        }
    }

    Ok(failures)
}
