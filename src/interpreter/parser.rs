/// Parser state, configuration and the top-level entry points.
pub mod core;

/// Additive and multiplicative chains.
///
/// Folds left-associative sequences of binary operators into nested nodes.
pub mod binary;

/// Primaries: literals, groupings and prefix negation.
pub mod unary;
