use clap::Parser;
use trigcalc::{
    cli::{Args, parse_binding},
    selftest::DEFAULT_TOLERANCE,
};

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("trigcalc").chain(argv.iter().copied()))
        .unwrap_or_else(|e| panic!("failed to parse {argv:?}: {e}"))
}

#[test]
fn expression_may_start_with_minus() {
    assert_eq!(args(&["-2^2"]).expression.as_deref(), Some("-2^2"));
    assert_eq!(args(&["-(-5)"]).expression.as_deref(), Some("-(-5)"));
    assert_eq!(args(&["-x*2"]).expression.as_deref(), Some("-x*2"));
}

#[test]
fn flags_before_a_negative_expression() {
    let parsed = args(&["--ast", "-2^2"]);
    assert!(parsed.ast);
    assert_eq!(parsed.expression.as_deref(), Some("-2^2"));

    let parsed = args(&["-t", "-v", "x=3", "-x"]);
    assert!(parsed.tokens);
    assert_eq!(parsed.vars, [("x".to_string(), 3.0)]);
    assert_eq!(parsed.expression.as_deref(), Some("-x"));
}

#[test]
fn defaults_without_arguments() {
    let parsed = args(&[]);
    assert_eq!(parsed.expression, None);
    assert!(parsed.vars.is_empty());
    assert!(!parsed.self_test);
    assert_eq!(parsed.tolerance, DEFAULT_TOLERANCE);
}

#[test]
fn bindings_accept_constant_expressions() {
    let parsed = args(&["--var", "angle=pi/2", "-v", "y = -1", "sin(angle) + y"]);
    assert_eq!(parsed.vars,
               [("angle".to_string(), std::f64::consts::FRAC_PI_2), ("y".to_string(), -1.0)]);
    assert!(parse_binding("x=y").is_err());
    assert!(Args::try_parse_from(["trigcalc", "-v", "x", "1"]).is_err());
}
