use trigcalc::{LexError, Token, tokenize};

fn kinds(src: &str) -> Vec<&'static str> {
    tokenize(src).unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
                 .iter()
                 .map(|l| l.token.kind_name())
                 .collect()
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("+ - * / ^ ( )"),
               ["PLUS", "MINUS", "MULTI", "DIV", "POW", "L_PAREN", "R_PAREN", "EOF"]);
}

#[test]
fn identifiers_are_classified() {
    let tokens = tokenize("sin sen cos tan pi e x angle").unwrap();
    let got: Vec<_> = tokens.into_iter().map(|l| l.token).collect();
    assert_eq!(got,
               [Token::Sin,
                Token::Sin,
                Token::Cos,
                Token::Tan,
                Token::Pi(std::f64::consts::PI),
                Token::E(std::f64::consts::E),
                Token::Var("x".to_string()),
                Token::Var("angle".to_string()),
                Token::Eof]);
}

#[test]
fn whole_identifier_is_classified() {
    assert_eq!(kinds("sinx pie exp"), ["VAR", "VAR", "VAR", "EOF"]);
}

#[test]
fn lone_e_is_the_constant() {
    assert_eq!(kinds("e"), ["E", "EOF"]);
    assert_eq!(kinds("e ex e_"), ["E", "VAR", "VAR", "EOF"]);
    assert_eq!(tokenize("2*e").unwrap()[2].token.value(), Some(std::f64::consts::E));
}

#[test]
fn whitespace_never_reaches_the_stream() {
    let tokens = tokenize(" \t1 \r\n+\x0c 2 ").unwrap();
    assert_eq!(kinds(" \t1 \r\n+\x0c 2 "), ["NUMBER", "PLUS", "NUMBER", "EOF"]);
    assert!(tokens.iter().all(|l| !l.text.trim().is_empty() || l.token == Token::Eof));
}

#[test]
fn digits_end_an_identifier() {
    assert_eq!(kinds("sin1"), ["SIN", "NUMBER", "EOF"]);
}

#[test]
fn numeric_literals() {
    let tokens = tokenize("42 3.5 .5 7.").unwrap();
    let values: Vec<_> = tokens.iter().filter_map(|l| l.token.value()).collect();
    assert_eq!(values, [42.0, 3.5, 0.5, 7.0]);
    assert_eq!(tokens[2].text, ".5");
}

#[test]
fn constants_carry_their_value() {
    let tokens = tokenize("pi e").unwrap();
    assert_eq!(tokens[0].token.value(), Some(std::f64::consts::PI));
    assert_eq!(tokens[1].token.value(), Some(std::f64::consts::E));
    assert_eq!(Token::Plus.value(), None);
}

#[test]
fn positions_are_byte_offsets() {
    let tokens = tokenize("  x *  12").unwrap();
    let positions: Vec<_> = tokens.iter().map(|l| l.position).collect();
    assert_eq!(positions, [2, 4, 7, 9]);
}

#[test]
fn stream_ends_with_exactly_one_eof() {
    for src in ["", "   ", "1", "sin(x) + 2"] {
        let tokens = tokenize(src).unwrap();
        let eofs = tokens.iter().filter(|l| l.token == Token::Eof).count();
        assert_eq!(eofs, 1, "{src:?}");
        assert_eq!(tokens.last().map(|l| &l.token), Some(&Token::Eof));
    }
}

#[test]
fn empty_input_is_only_eof() {
    assert_eq!(kinds(""), ["EOF"]);
}

#[test]
fn second_decimal_point_is_rejected() {
    assert_eq!(tokenize("5..3"),
               Err(LexError::MalformedNumber { literal:  "5.".to_string(),
                                               position: 2, }));
    assert_eq!(tokenize("1 + 1.2.3"),
               Err(LexError::MalformedNumber { literal:  "1.2".to_string(),
                                               position: 7, }));
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(tokenize("3@4"),
               Err(LexError::InvalidCharacter { character: '@',
                                                position:  1, }));
    assert!(matches!(tokenize("x = 1"), Err(LexError::InvalidCharacter { character: '=', .. })));
    assert!(matches!(tokenize("2 % 3"), Err(LexError::InvalidCharacter { character: '%', .. })));
}

#[test]
fn tokenizing_is_deterministic() {
    let src = "cos(x)^2 + sin(x)^2 - .5 * pi";
    assert_eq!(tokenize(src), tokenize(src));
}

#[test]
fn lexemes_display_kind_text_and_position() {
    let tokens = tokenize("pi").unwrap();
    assert_eq!(tokens[0].to_string(),
               format!("PI       'pi'       @0 = {}", std::f64::consts::PI));
    assert_eq!(tokens[1].describe(), "end of input");
}
