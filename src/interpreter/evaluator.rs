/// Core evaluation logic and context management.
///
/// Contains the evaluation context that borrows the variable environment,
/// the main dispatch over expression variants, and the public `evaluate`
/// entry point.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic operators, including the division-by-zero check
/// and real exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Function evaluation.
///
/// Applies the built-in trigonometric functions, and resolves function names
/// for callers that only have a name at hand.
pub mod function;

/// Free variable analysis.
///
/// Read-only queries over the syntax tree that report which variables an
/// expression needs, without evaluating it.
pub mod variables;
