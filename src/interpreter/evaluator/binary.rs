use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Addition, subtraction and multiplication are applied directly.
    /// Division first checks the divisor for exact equality with zero, so it
    /// never produces an infinity or NaN. Power uses real exponentiation
    /// (`powf`); combinations that are undefined over the reals, such as a
    /// negative base with a fractional exponent, yield NaN and are not
    /// treated as errors.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0, 0);
    /// assert_eq!(result.unwrap(), 1024.0);
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// assert!(Context::eval_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0, 0).unwrap()
    ///                                                                      .is_nan());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.powf(right)),
        }
    }
}
