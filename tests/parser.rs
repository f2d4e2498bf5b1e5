use trigcalc::{
    Expr, ParseError,
    ast::{BinaryOperator, Function, UnaryOperator},
    parse, parse_str, tokenize,
};

fn tree(src: &str) -> Expr {
    parse_str(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"));
    match parse(&tokens) {
        Ok(expr) => panic!("{src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn negation_wraps_power() {
    match tree("-2^2") {
        Expr::UnaryOp { op: UnaryOperator::Negate,
                        expr,
                        position: 0, } => {
            assert!(matches!(*expr, Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }
}

#[test]
fn power_nests_to_the_right() {
    match tree("2^3^2") {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Pow,
                         right,
                         position: 1, } => {
            assert!(matches!(*left, Expr::Number { value, .. } if value == 2.0));
            assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Pow, position: 3, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }
}

#[test]
fn subtraction_nests_to_the_left() {
    match tree("a - b - c") {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Sub,
                         right, .. } => {
            assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
            assert!(matches!(*right, Expr::Variable { ref name, .. } if name == "c"));
        },
        other => panic!("unexpected tree: {other:?}"),
    }
}

#[test]
fn function_calls_hold_their_argument() {
    match tree("sen(x + 1)") {
        Expr::FunctionCall { function: Function::Sin,
                             argument,
                             position: 0, } => {
            assert!(matches!(*argument, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
        },
        other => panic!("unexpected tree: {other:?}"),
    }
}

#[test]
fn grouping_adds_no_node() {
    assert_eq!(tree("((x))"),
               Expr::Variable { name:     "x".to_string(),
                                position: 2, });
}

#[test]
fn constants_become_numbers() {
    assert_eq!(tree("pi"),
               Expr::Number { value:    std::f64::consts::PI,
                              position: 0, });
}

#[test]
fn printing_shows_grouping() {
    assert_eq!(tree("3 + 4 * 2").to_string(), "3 + 4 * 2");
    assert_eq!(tree("(3 + 4) * 2").to_string(), "(3 + 4) * 2");
    assert_eq!(tree("(2^3)^2").to_string(), "(2 ^ 3) ^ 2");
    assert_eq!(tree("(-2)^2").to_string(), "(-2) ^ 2");
    assert_eq!(tree("1 - (2 - 3)").to_string(), "1 - (2 - 3)");
    assert_eq!(tree("2^-x").to_string(), "2 ^ -x");
    assert_eq!(tree("-(a + b)").to_string(), "-(a + b)");
}

#[test]
fn empty_stream_is_empty_expression() {
    assert_eq!(parse_err(""), ParseError::EmptyExpression);
}

#[test]
fn trailing_tokens_are_reported() {
    assert_eq!(parse_err("3+4)"),
               ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                      position: 3, });
    assert!(matches!(parse_err("2 3"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_err("x y"), ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn missing_operands_are_reported() {
    assert!(matches!(parse_err("()"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("-"), ParseError::UnexpectedEndOfInput { position: 1 }));
    assert!(matches!(parse_err("2^"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_err("sin()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn unclosed_function_argument_is_reported() {
    assert_eq!(parse_err("cos(1"),
               ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                  position: 5, });
}

#[test]
fn opening_paren_at_end_of_input_is_unclosed() {
    assert_eq!(parse_err("("),
               ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                  position: 1, });
    assert_eq!(parse_err("sin("),
               ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                  position: 4, });
    assert_eq!(parse_err("2 * (("),
               ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                  position: 6, });
    assert!(parse_err("sin(").to_string().contains("closing parenthesis"));
    assert!(matches!(parse_err("(3+"), ParseError::UnexpectedEndOfInput { position: 3 }));
}

#[test]
fn truncated_streams_are_rejected() {
    assert_eq!(parse(&[]), Err(ParseError::UnexpectedEndOfInput { position: 0 }));

    let mut tokens = tokenize("1 +").unwrap();
    tokens.pop();
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn tokens_after_eof_are_rejected() {
    let mut tokens = tokenize("1").unwrap();
    tokens.extend(tokenize("2").unwrap());
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedTrailingTokens { .. })));
}
