//! # trigcalc
//!
//! trigcalc is an expression interpreter for arithmetic with trigonometric
//! functions, named constants and free variables, written in Rust.
//! It tokenizes, parses and evaluates expressions such as `cos(x)^2 + sin(x)^2`
//! against a caller-supplied set of variable bindings.
//!
//! The pipeline has three phases, each failing fast with its own error type:
//!
//! ```
//! use trigcalc::{Environment, collect_free_variables, evaluate, parse, tokenize};
//!
//! let tokens = tokenize("x * 2 + y").unwrap();
//! let expr = parse(&tokens).unwrap();
//!
//! let needed: Vec<_> = collect_free_variables(&expr).into_iter().collect();
//! assert_eq!(needed, ["x", "y"]);
//!
//! let env = Environment::from([("x".to_string(), 3.0), ("y".to_string(), 4.0)]);
//! assert_eq!(evaluate(&expr, &env).unwrap(), 10.0);
//! ```

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

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and function types
/// that represent the syntactic structure of an expression as a tree. The AST
/// is built by the parser and traversed by the evaluator and the printers.
///
/// # Responsibilities
/// - Defines a closed set of node variants, each owning its children.
/// - Attaches source positions to nodes for error reporting.
/// - Prints trees back in infix form.
pub mod ast;
/// Command-line arguments of the `trigcalc` binary.
pub mod cli;
/// Renders syntax trees for people.
///
/// Provides a vertical tree layout of an expression, used by the command-line
/// driver to show how an input was grouped.
pub mod display;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised by each phase. Every
/// error carries its kind, a message through `Display`, and the source
/// position it refers to where one exists.
///
/// # Responsibilities
/// - Defines one error enum per phase and an umbrella `Error`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing and evaluation. It exposes the
/// building blocks behind the crate-level functions for callers that need
/// finer control, such as an evaluation `Context` reused across expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Fixed scenarios exercising the whole pipeline.
///
/// Each scenario pairs an expression and bindings with the value or the
/// failing phase it must produce. The command-line driver replays them on
/// request.
pub mod selftest;

use log::debug;

pub use crate::{
    ast::Expr,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::{
            core::{Environment, evaluate},
            variables::collect_free_variables,
        },
        lexer::{Lexeme, Token, tokenize},
        parser::core::parse,
    },
};

/// Tokenizes and parses a source string into an expression tree.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` from the first phase that fails.
///
/// # Example
/// ```
/// use trigcalc::{Error, ParseError, parse_str};
///
/// assert!(parse_str("sin(x) + 1").is_ok());
/// assert!(matches!(parse_str("(3+4"),
///                  Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))));
/// ```
pub fn parse_str(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Runs the whole pipeline on a source string.
///
/// # Errors
/// Returns the error of the first phase that fails; no partial result is
/// ever produced.
///
/// # Example
/// ```
/// use trigcalc::{Environment, Error, calculate};
///
/// assert_eq!(calculate("3 + 4 * 2", &Environment::new()).unwrap(), 11.0);
/// assert!(matches!(calculate("3@4", &Environment::new()), Err(Error::Lex(_))));
/// ```
pub fn calculate(source: &str, env: &Environment) -> Result<f64, Error> {
    debug!("calculating {source:?} with {} binding(s)", env.len());
    let expr = parse_str(source)?;
    Ok(evaluate(&expr, env)?)
}
