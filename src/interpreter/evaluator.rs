/// Binary operator evaluation logic.
///
/// Handles the arithmetic of every infix operator: addition, subtraction,
/// multiplication, division and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators (identity, negation, reciprocal) and the
/// postfix factorial.
pub mod unary;

/// Core evaluation types shared by the operator implementations.
pub mod core;
