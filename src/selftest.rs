use std::fmt;

use log::{debug, warn};

use crate::{Environment, Error, calculate};

/// Tolerance applied to scenarios that do not set their own.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// The phase a failing scenario is expected to fail in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Tokenization fails.
    Lex,
    /// Parsing fails.
    Parse,
    /// Evaluation fails.
    Eval,
}

impl FailureKind {
    /// Returns `true` if `error` was raised by this phase.
    #[must_use]
    pub const fn matches(self, error: &Error) -> bool {
        matches!((self, error),
                 (Self::Lex, Error::Lex(_))
                 | (Self::Parse, Error::Parse(_))
                 | (Self::Eval, Error::Eval(_)))
    }
}

/// What a scenario expects the pipeline to produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation {
    /// A value within `tolerance` of `expected`, or within the runner's
    /// default tolerance when `tolerance` is `None`.
    Value {
        /// The expected result.
        expected:  f64,
        /// Allowed absolute difference.
        tolerance: Option<f64>,
    },
    /// No value; an error from the given phase.
    Failure(FailureKind),
}

/// One fixed input together with its bindings and expected outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Source text of the expression.
    pub expression:  &'static str,
    /// Variable bindings used for evaluation.
    pub bindings:    &'static [(&'static str, f64)],
    /// Expected outcome.
    pub expected:    Expectation,
    /// Human readable description of what the scenario checks.
    pub description: &'static str,
}

const fn value(expression: &'static str,
               expected: f64,
               tolerance: Option<f64>,
               description: &'static str)
               -> Scenario {
    Scenario { expression,
               bindings: &[],
               expected: Expectation::Value { expected, tolerance },
               description }
}

const fn failure(expression: &'static str,
                 kind: FailureKind,
                 description: &'static str)
                 -> Scenario {
    Scenario { expression,
               bindings: &[],
               expected: Expectation::Failure(kind),
               description }
}

/// The built-in scenario table: expressions that must evaluate to a known
/// value, followed by expressions that must fail in a given phase.
pub const SCENARIOS: &[Scenario] = &[
    value("3 + 4 * 2", 11.0, None, "multiplication before addition"),
    value("(3 + 4) * 2", 14.0, None, "parentheses override precedence"),
    value("-2^2", -4.0, None, "negation binds looser than power: -(2^2)"),
    value("2^3^2", 512.0, None, "power is right-associative: 2^(3^2)"),
    value("sin(pi/2)", 1.0, Some(1e-4), "sin(pi/2) = 1"),
    value("cos(0) + sin(pi)", 1.0, Some(1e-4), "cos(0) + sin(pi) = 1"),
    Scenario { expression:  "x*2+y",
               bindings:    &[("x", 3.0), ("y", 4.0)],
               expected:    Expectation::Value { expected:  10.0,
                                                 tolerance: None, },
               description: "variables x=3, y=4", },
    value("3.5 * 2.0 + .5", 7.5, None, "decimal literals, including a leading dot"),
    value("tan(pi/4)", 1.0, Some(1e-4), "tan(pi/4) = 1"),
    value("2^(1/2)", std::f64::consts::SQRT_2, Some(1e-5), "square root as a power"),
    Scenario { expression:  "cos(x)^2 + sin(x)^2",
               bindings:    &[("x", 0.5)],
               expected:    Expectation::Value { expected:  1.0,
                                                 tolerance: Some(1e-4), },
               description: "Pythagorean identity at x=0.5", },
    Scenario { expression:  "sin(cos(x))",
               bindings:    &[("x", 0.0)],
               expected:    Expectation::Value { expected:  0.841_470_984_8,
                                                 tolerance: Some(1e-4), },
               description: "function composition at x=0", },
    value("-(-5)", 5.0, None, "double negation"),
    value("e^1", std::f64::consts::E, Some(1e-5), "the constant e"),
    value("2*pi", 2.0 * std::f64::consts::PI, Some(1e-5), "a multiple of pi"),
    failure("3+*4", FailureKind::Parse, "operator without an operand"),
    failure("5..3", FailureKind::Lex, "number with two decimal points"),
    failure("(3+4", FailureKind::Parse, "unclosed parenthesis"),
    failure("3+4)", FailureKind::Parse, "unmatched closing parenthesis"),
    failure("", FailureKind::Parse, "empty expression"),
    failure("1/0", FailureKind::Eval, "division by zero"),
    failure("3@4", FailureKind::Lex, "invalid character"),
    failure("sin1", FailureKind::Parse, "function without parentheses"),
    failure("3++4", FailureKind::Parse, "two operators in a row"),
];

/// The result of running one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The scenario that was run.
    pub scenario: Scenario,
    /// Whether the scenario's expectation was met.
    pub passed:   bool,
    /// What the pipeline actually produced.
    pub detail:   String,
}

/// Outcomes of a full run, in scenario order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// One outcome per scenario.
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Number of scenarios that met their expectation.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of scenarios that did not.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Returns `true` if every scenario passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let mark = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f,
                     "[{mark}] {:<22} {} ({})",
                     outcome.scenario.expression, outcome.detail, outcome.scenario.description)?;
        }
        write!(f,
               "{} passed, {} failed, {} total",
               self.passed(),
               self.failed(),
               self.outcomes.len())
    }
}

/// Runs a single scenario through the full pipeline.
#[must_use]
pub fn run_scenario(scenario: &Scenario, default_tolerance: f64) -> Outcome {
    let env: Environment = scenario.bindings
                                   .iter()
                                   .map(|(name, value)| ((*name).to_string(), *value))
                                   .collect();
    let result = calculate(scenario.expression, &env);

    let (passed, detail) = match (scenario.expected, result) {
        (Expectation::Value { expected, tolerance }, Ok(actual)) => {
            let tolerance = tolerance.unwrap_or(default_tolerance);
            ((actual - expected).abs() < tolerance,
             format!("got {actual:.10}, expected {expected:.10}"))
        },
        (Expectation::Value { expected, .. }, Err(e)) => {
            (false, format!("unexpected error, expected {expected:.10}: {e}"))
        },
        (Expectation::Failure(_), Ok(actual)) => {
            (false, format!("expected an error but got {actual:.10}"))
        },
        (Expectation::Failure(kind), Err(e)) => (kind.matches(&e), format!("{e}")),
    };

    if passed {
        debug!("scenario {:?} passed: {detail}", scenario.expression);
    } else {
        warn!("scenario {:?} failed: {detail}", scenario.expression);
    }

    Outcome { scenario: *scenario,
              passed,
              detail }
}

/// Runs every scenario in order and collects the outcomes.
///
/// # Example
/// ```
/// use trigcalc::selftest::{DEFAULT_TOLERANCE, SCENARIOS, run_scenarios};
///
/// let report = run_scenarios(SCENARIOS, DEFAULT_TOLERANCE);
/// assert!(report.is_success(), "{report}");
/// assert_eq!(report.passed(), SCENARIOS.len());
/// ```
#[must_use]
pub fn run_scenarios(scenarios: &[Scenario], default_tolerance: f64) -> Report {
    Report { outcomes: scenarios.iter()
                                .map(|s| run_scenario(s, default_tolerance))
                                .collect(), }
}
