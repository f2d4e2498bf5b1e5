use crate::{
    ast::Function,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Applies a built-in function to an already evaluated argument.
    ///
    /// Arguments are in radians.
    #[must_use]
    pub fn eval_function(function: Function, argument: f64) -> f64 {
        function.apply(argument)
    }

    /// Applies a function given only by its name.
    ///
    /// Syntax trees built by the parser always hold a resolved [`Function`],
    /// so this is only needed by callers that start from a name, such as a
    /// host application exposing the functions by name.
    ///
    /// # Errors
    /// Returns `InvalidFunction` if `name` is not `sin`, `sen`, `cos` or
    /// `tan`.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{EvalError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::call_function("cos", 0.0), Ok(1.0));
    /// assert_eq!(Context::call_function("sqrt", 4.0),
    ///            Err(EvalError::InvalidFunction { name: "sqrt".to_string() }));
    /// ```
    pub fn call_function(name: &str, argument: f64) -> EvalResult<f64> {
        let function: Function = name.parse()?;
        Ok(Self::eval_function(function, argument))
    }
}
