/// Core parsing entry points.
///
/// Contains the top-level `parse` routine that checks for empty input and
/// trailing tokens, and `parse_expression`, the root of the precedence
/// hierarchy.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and the atoms of the grammar: numbers, constants,
/// variables, function calls and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power levels of the grammar,
/// including the right-associativity of `^`.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides token lookahead helpers and closing-parenthesis checks shared by
/// the other parser modules.
pub mod utils;
