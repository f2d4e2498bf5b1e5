use trigcalc::{Environment, Error, EvalError, LexError, ParseError, calculate};

const TOLERANCE: f64 = 1e-4;

fn env(bindings: &[(&str, f64)]) -> Environment {
    bindings.iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
}

fn assert_value(src: &str, bindings: &[(&str, f64)], expected: f64) {
    match calculate(src, &env(bindings)) {
        Ok(v) => assert!((v - expected).abs() < TOLERANCE,
                         "{src:?} evaluated to {v}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match calculate(src, &Environment::new()) {
        Ok(v) => panic!("{src:?} succeeded with {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3 + 4 * 2", &[], 11.0);
    assert_value("(3 + 4) * 2", &[], 14.0);
    assert_value("10 - 4 - 3", &[], 3.0);
    assert_value("16 / 4 / 2", &[], 2.0);
    assert_value("2 * 3 ^ 2", &[], 18.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_value("-2^2", &[], -4.0);
    assert_value("(-2)^2", &[], 4.0);
    assert_value("-(-5)", &[], 5.0);
    assert_value("--5", &[], 5.0);
    assert_value("2^-1", &[], 0.5);
    assert_value("3 * -2", &[], -6.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", &[], 512.0);
    assert_value("(2^3)^2", &[], 64.0);
}

#[test]
fn trigonometry_and_constants() {
    assert_value("sin(pi/2)", &[], 1.0);
    assert_value("sen(pi/2)", &[], 1.0);
    assert_value("tan(pi/4)", &[], 1.0);
    assert_value("cos(0) + sin(pi)", &[], 1.0);
    assert_value("e^1", &[], std::f64::consts::E);
    assert_value("2*pi", &[], 2.0 * std::f64::consts::PI);
    assert_value("2^(1/2)", &[], std::f64::consts::SQRT_2);
}

#[test]
fn variables() {
    assert_value("x*2+y", &[("x", 3.0), ("y", 4.0)], 10.0);
    assert_value("cos(x)^2 + sin(x)^2", &[("x", 0.5)], 1.0);
    assert_value("sin(cos(x))", &[("x", 0.0)], 0.841_470_984_8);
    assert_value("angle / two", &[("angle", 3.0), ("two", 2.0)], 1.5);
}

#[test]
fn decimal_literals() {
    assert_value("3.5 * 2.0 + .5", &[], 7.5);
    assert_value("5.", &[], 5.0);
    assert_value(".25 * 4", &[], 1.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  3\t+\n4 ", &[], 7.0);
}

#[test]
fn operator_without_operand_is_syntax_error() {
    assert_eq!(assert_failure("3+*4"),
               Error::Parse(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                          position: 2, }));
    assert_eq!(assert_failure("3++4"),
               Error::Parse(ParseError::UnexpectedToken { token:    "+".to_string(),
                                                          position: 2, }));
    assert_eq!(assert_failure("3+"),
               Error::Parse(ParseError::UnexpectedEndOfInput { position: 2 }));
}

#[test]
fn double_decimal_point_is_lexical_error() {
    assert_eq!(assert_failure("5..3"),
               Error::Lex(LexError::MalformedNumber { literal:  "5.".to_string(),
                                                      position: 2, }));
    assert!(matches!(assert_failure("1.2.3"), Error::Lex(LexError::MalformedNumber { .. })));
    assert!(matches!(assert_failure("5..."), Error::Lex(LexError::MalformedNumber { .. })));
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert_eq!(assert_failure("(3+4"),
               Error::Parse(ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                               position: 4, }));
    assert_eq!(assert_failure("3+4)"),
               Error::Parse(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                                   position: 3, }));
    assert!(matches!(assert_failure(")"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn empty_expression_is_syntax_error() {
    assert_eq!(assert_failure(""), Error::Parse(ParseError::EmptyExpression));
    assert_eq!(assert_failure("   "), Error::Parse(ParseError::EmptyExpression));
}

#[test]
fn division_by_zero_is_evaluation_error() {
    assert_eq!(assert_failure("1/0"),
               Error::Eval(EvalError::DivisionByZero { position: 1 }));
    assert!(matches!(assert_failure("1/(2-2)"), Error::Eval(EvalError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("0/0"), Error::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn invalid_character_is_lexical_error() {
    assert_eq!(assert_failure("3@4"),
               Error::Lex(LexError::InvalidCharacter { character: '@',
                                                       position:  1, }));
    assert!(matches!(assert_failure("."), Error::Lex(LexError::InvalidCharacter { .. })));
    assert!(matches!(assert_failure("x1"), Error::Parse(_)));
}

#[test]
fn function_without_parentheses_is_syntax_error() {
    assert_eq!(assert_failure("sin1"),
               Error::Parse(ParseError::ExpectedFunctionParen { function: "sin".to_string(),
                                                                found:    "'1'".to_string(),
                                                                position: 3, }));
    assert!(matches!(assert_failure("cos x"),
                     Error::Parse(ParseError::ExpectedFunctionParen { .. })));
    assert!(matches!(assert_failure("tan"),
                     Error::Parse(ParseError::ExpectedFunctionParen { .. })));
}

#[test]
fn unbound_variable_is_evaluation_error() {
    assert_eq!(assert_failure("x + 1"),
               Error::Eval(EvalError::UndefinedVariable { name:     "x".to_string(),
                                                          position: 0, }));
}

#[test]
fn undefined_power_is_nan_not_error() {
    let v = calculate("(-8)^(1/3)", &Environment::new()).unwrap();
    assert!(v.is_nan());
}

#[test]
fn errors_render_with_their_kind() {
    assert_eq!(assert_failure("3@4").to_string(),
               "Lexical error: Invalid character '@' at position 1.");
    assert_eq!(assert_failure("").to_string(), "Syntax error: Empty expression.");
    assert_eq!(assert_failure("1/0").to_string(),
               "Evaluation error: Division by zero at position 1.");
    assert_eq!(assert_failure("3+4)").kind(), "syntax");
    assert_eq!(assert_failure("3+4)").position(), Some(3));
}
