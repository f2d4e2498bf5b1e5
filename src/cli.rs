use clap::Parser;

use crate::{Environment, calculate, selftest::DEFAULT_TOLERANCE};

/// trigcalc evaluates arithmetic expressions with trigonometric functions,
/// the constants `pi` and `e`, and free variables.
#[derive(Parser, Debug)]
#[command(name = "trigcalc", version, about, long_about = None)]
pub struct Args {
    /// Binds a variable before evaluation, e.g. `-v x=3` or `-v angle=pi/4`.
    /// May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub vars: Vec<(String, f64)>,

    /// Prints the token stream of each expression.
    #[arg(short, long)]
    pub tokens: bool,

    /// Prints the syntax tree of each expression.
    #[arg(short, long)]
    pub ast: bool,

    /// Runs the built-in scenarios and exits.
    #[arg(long)]
    pub self_test: bool,

    /// Tolerance used by scenarios that do not set their own.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Expression to evaluate. Starts an interactive session when omitted.
    /// May start with a minus sign, as in `-2^2`.
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,
}

/// Parses a `NAME=VALUE` binding. The value may itself be a constant
/// expression such as `pi/4`.
///
/// # Example
/// ```
/// use trigcalc::cli::parse_binding;
///
/// assert_eq!(parse_binding("x = 2 * 3"), Ok(("x".to_string(), 6.0)));
/// assert!(parse_binding("x").is_err());
/// assert!(parse_binding("=1").is_err());
/// ```
pub fn parse_binding(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{s}'"));
    }
    let value = calculate(value.trim(), &Environment::new())
                    .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}
