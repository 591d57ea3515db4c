/// Core evaluation logic for expression trees.
///
/// Contains the recursive fold over [`crate::ast::Expr`] and the top-level
/// entry points.
pub mod core;

/// Unary operator evaluation.
pub mod unary;

/// Binary operator evaluation, including the division-by-zero check.
pub mod binary;
