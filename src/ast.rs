use std::{fmt, str::FromStr};

use crate::error::EvalError;

/// The unary operators of the language.
///
/// Only arithmetic negation exists; it is kept as an enum so the evaluator
/// and printers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Negate => '-',
        }
    }
}

/// The binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength used by the infix printer; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }
}

/// The built-in functions. All take a single argument in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine. Spelled `sin` or `sen` in source.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
}

impl Function {
    /// Canonical name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Applies the function to an argument in radians.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
        }
    }
}

/// Resolves a function by name.
///
/// This is the only way an arbitrary name can become a [`Function`], so it is
/// where unknown names are rejected.
///
/// # Example
/// ```
/// use trigcalc::{EvalError, ast::Function};
///
/// assert_eq!("sen".parse::<Function>(), Ok(Function::Sin));
/// assert_eq!("sinh".parse::<Function>(),
///            Err(EvalError::InvalidFunction { name: "sinh".to_string() }));
/// ```
impl FromStr for Function {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" | "sen" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            _ => Err(EvalError::InvalidFunction { name: s.to_string() }),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed. Every composite node owns its children, so
/// a tree is always acyclic and never shares subtrees. Each node remembers the
/// byte offset of the source token it was built from, which is used only for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, including the constants `pi` and `e`.
    Number {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reference to a free variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A call to one of the built-in functions (e.g. `sin(x)`).
    FunctionCall {
        /// The function being called.
        function: Function,
        /// The single argument.
        argument: Box<Self>,
        /// Byte offset of the function name.
        position: usize,
    },
}

impl Expr {
    /// Builds a number node at position 0.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value, position: 0 }
    }

    /// Builds a variable node at position 0.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name:     name.into(),
                         position: 0, }
    }

    /// Builds a negation node at position 0.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::UnaryOp { op:       UnaryOperator::Negate,
                        expr:     Box::new(expr),
                        position: 0, }
    }

    /// Builds a binary node at position 0.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position: 0 }
    }

    /// Builds a call node from a function name.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidFunction`] if `name` is not a built-in
    /// function.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{Environment, ast::Expr, evaluate};
    ///
    /// let call = Expr::call("cos", Expr::number(0.0)).unwrap();
    /// assert_eq!(evaluate(&call, &Environment::new()).unwrap(), 1.0);
    ///
    /// assert!(Expr::call("log", Expr::number(1.0)).is_err());
    /// ```
    pub fn call(name: &str, argument: Self) -> Result<Self, EvalError> {
        Ok(Self::FunctionCall { function: name.parse()?,
                                argument: Box::new(argument),
                                position: 0, })
    }

    /// Returns the source position the node was built from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Binding strength of the node's outermost construct, used to decide
    /// where the infix printer needs parentheses.
    const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { .. } => 3,
            Self::Number { .. } | Self::Variable { .. } | Self::FunctionCall { .. } => 5,
        }
    }
}

/// Prints the expression in infix form with the minimum parentheses needed
/// for it to parse back to an equivalent tree.
///
/// # Example
/// ```
/// let expr = trigcalc::parse_str("-(2 ^ 2) + (1 - x) * sin(pi)").unwrap();
/// assert_eq!(expr.to_string(), "-2 ^ 2 + (1 - x) * sin(3.141592653589793)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => {
                if value.is_sign_negative() {
                    write!(f, "({value})")
                } else {
                    write!(f, "{value}")
                }
            },
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => {
                if expr.precedence() < self.precedence() {
                    write!(f, "{}({expr})", op.symbol())
                } else {
                    write!(f, "{}{expr}", op.symbol())
                }
            },
            Self::BinaryOp { left, op, right, .. } => {
                let prec = op.precedence();
                // `^` groups to the right; the other operators to the left.
                let (left_min, right_min) = if matches!(op, BinaryOperator::Pow) {
                    (prec + 1, 3)
                } else {
                    (prec, prec + 1)
                };
                if left.precedence() < left_min {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }
                write!(f, " {} ", op.symbol())?;
                if right.precedence() < right_min {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            },
            Self::FunctionCall { function, argument, .. } => {
                write!(f, "{}({argument})", function.name())
            },
        }
    }
}
