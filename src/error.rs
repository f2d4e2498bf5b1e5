/// Lexical errors.
///
/// Raised while turning the source string into tokens: characters that
/// cannot start any token and numeric literals with more than one decimal
/// point.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from a token stream, such as unexpected tokens, unbalanced parentheses
/// and empty input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while walking the syntax tree:
/// unbound variables, division by zero and unknown function names.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced by the pipeline.
///
/// Each phase fails with its own error type; this enum lets callers that run
/// several phases in a row propagate all of them with `?` while keeping the
/// original kind intact.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The token stream did not form a valid expression.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Eval(EvalError),
}

impl Error {
    /// Returns a short name for the phase that failed.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{Environment, calculate};
    ///
    /// let err = calculate("1 / 0", &Environment::new()).unwrap_err();
    /// assert_eq!(err.kind(), "evaluation");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lexical",
            Self::Parse(_) => "syntax",
            Self::Eval(_) => "evaluation",
        }
    }

    /// Returns the byte offset in the source the error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexical error: {e}"),
            Self::Parse(e) => write!(f, "Syntax error: {e}"),
            Self::Eval(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
