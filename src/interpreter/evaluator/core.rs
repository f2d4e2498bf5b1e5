use std::collections::HashMap;

use log::debug;

use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Mapping from free variable names to their values.
pub type Environment = HashMap<String, f64>;

/// Stores the runtime evaluation context.
///
/// The context borrows the variable environment for the duration of an
/// evaluation. Evaluation never writes to the environment, so one environment
/// can back any number of contexts at once.
///
/// ## Usage
///
/// Build the environment first, then create a `Context` over it and call
/// [`Context::eval`] for each expression to evaluate.
pub struct Context<'env> {
    env: &'env Environment,
}

impl<'env> Context<'env> {
    /// Creates an evaluation context over the given environment.
    #[must_use]
    pub const fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Returns the environment the context reads from.
    #[must_use]
    pub const fn environment(&self) -> &'env Environment {
        self.env
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The walk is
    /// post-order: every operand is fully evaluated, left before right, before
    /// the operator of its parent is applied. The first error aborts the walk.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{Environment, interpreter::evaluator::core::Context, parse_str};
    ///
    /// let env = Environment::from([("x".to_string(), 3.0), ("y".to_string(), 4.0)]);
    /// let expr = parse_str("x*2+y").unwrap();
    ///
    /// assert_eq!(Context::new(&env).eval(&expr).unwrap(), 10.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                Self::eval_binary(*op, l, r, *position)
            },
            Expr::FunctionCall { function, argument, .. } => {
                let arg = self.eval(argument)?;
                Ok(Self::eval_function(*function, arg))
            },
        }
    }

    /// Looks up a variable in the environment.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if the environment has no binding for
    /// `name`.
    pub fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.env
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string(),
                                                          position })
    }
}

/// Evaluates an expression tree against an environment.
///
/// The environment is only read. Each call is independent of any other.
///
/// # Errors
/// - `UndefinedVariable` if a variable has no binding.
/// - `DivisionByZero` if a divisor evaluates to exactly zero.
///
/// # Example
/// ```
/// use trigcalc::{Environment, EvalError, evaluate, parse_str};
///
/// let expr = parse_str("-2^2").unwrap();
/// assert_eq!(evaluate(&expr, &Environment::new()), Ok(-4.0));
///
/// let expr = parse_str("1/0").unwrap();
/// assert_eq!(evaluate(&expr, &Environment::new()),
///            Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    let result = Context::new(env).eval(expr);
    match &result {
        Ok(value) => debug!("evaluated {expr} = {value}"),
        Err(e) => debug!("evaluation of {expr} failed: {e}"),
    }
    result
}
