use indexmap::IndexSet;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::Context,
};

/// Collects the names of all variables referenced by an expression.
///
/// Names are returned once each, in the order they first appear when reading
/// the expression from left to right. Nothing is evaluated, so this works on
/// expressions that would fail to evaluate.
///
/// # Example
/// ```
/// use trigcalc::{collect_free_variables, parse_str};
///
/// let expr = parse_str("x * y / x + sin(z)").unwrap();
/// let vars: Vec<_> = collect_free_variables(&expr).into_iter().collect();
/// assert_eq!(vars, ["x", "y", "z"]);
/// ```
#[must_use]
pub fn collect_free_variables(expr: &Expr) -> IndexSet<String> {
    fn walk(node: &Expr, out: &mut IndexSet<String>) {
        match node {
            Expr::Number { .. } => {},
            Expr::Variable { name, .. } => {
                if !out.contains(name) {
                    out.insert(name.clone());
                }
            },
            Expr::UnaryOp { expr, .. } => walk(expr, out),
            Expr::BinaryOp { left, right, .. } => {
                walk(left, out);
                walk(right, out);
            },
            Expr::FunctionCall { argument, .. } => walk(argument, out),
        }
    }

    let mut out = IndexSet::new();
    walk(expr, &mut out);
    out
}

impl Context<'_> {
    /// Returns the free variables of `expr` that have no binding in the
    /// context's environment, in first-appearance order.
    ///
    /// # Example
    /// ```
    /// use trigcalc::{Environment, interpreter::evaluator::core::Context, parse_str};
    ///
    /// let env = Environment::from([("y".to_string(), 1.0)]);
    /// let expr = parse_str("x + y + z").unwrap();
    /// let missing: Vec<_> = Context::new(&env).missing_variables(&expr)
    ///                                         .into_iter()
    ///                                         .collect();
    /// assert_eq!(missing, ["x", "z"]);
    /// ```
    #[must_use]
    pub fn missing_variables(&self, expr: &Expr) -> IndexSet<String> {
        collect_free_variables(expr).into_iter()
                                    .filter(|name| !self.environment().contains_key(name))
                                    .collect()
    }

    /// Returns `true` if every free variable of `expr` is bound.
    #[must_use]
    pub fn is_fully_bound(&self, expr: &Expr) -> bool {
        self.missing_variables(expr).is_empty()
    }
}
