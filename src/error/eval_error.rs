#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// The expression refers to a variable missing from the environment.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the reference in the source.
        position: usize,
    },
    /// The right operand of a division evaluated to exactly zero.
    DivisionByZero {
        /// Byte offset of the `/` operator in the source.
        position: usize,
    },
    /// A function name outside `sin`, `sen`, `cos` and `tan`.
    InvalidFunction {
        /// The name that was requested.
        name: String,
    },
}

impl EvalError {
    /// Byte offset in the source the error points at, when it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UndefinedVariable { position, .. } | Self::DivisionByZero { position } => {
                Some(*position)
            },
            Self::InvalidFunction { .. } => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Undefined variable '{name}' at position {position}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero at position {position}.")
            },
            Self::InvalidFunction { name } => write!(f, "Invalid function name '{name}'."),
        }
    }
}

impl std::error::Error for EvalError {}
