#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token that cannot appear at this point of the expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead.
        found:    String,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A function name was not immediately followed by `(`.
    ExpectedFunctionParen {
        /// The function name as written.
        function: String,
        /// The token found instead of `(`.
        found:    String,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
}

impl ParseError {
    /// Byte offset in the source the error points at.
    ///
    /// `EmptyExpression` has no position since there is nothing to point at.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position, .. }
            | Self::ExpectedFunctionParen { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => Some(*position),
            Self::EmptyExpression => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}.")
            },

            Self::ExpectedClosingParen { found, position } => write!(f,
                                                                     "Expected closing parenthesis ')' at position {position} but found {found}."),

            Self::ExpectedFunctionParen { function,
                                          found,
                                          position, } => write!(f,
                                                                "Function '{function}' must be followed by '(' but found {found} at position {position}."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Unexpected token after expression: '{token}' at position {position}."),

            Self::EmptyExpression => write!(f, "Empty expression."),
        }
    }
}

impl std::error::Error for ParseError {}
