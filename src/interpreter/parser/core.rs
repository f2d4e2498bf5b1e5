use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// The sequence must be the output of [`tokenize`](crate::tokenize): it ends
/// with exactly one `Eof`. A sequence holding nothing but `Eof` is rejected as
/// an empty expression before any operand is looked for, and every token must
/// be consumed by the expression.
///
/// # Errors
/// - `EmptyExpression` if the input contained no tokens.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression,
///   as in `3+4)`.
/// - `UnexpectedEndOfInput` if the sequence is empty or not terminated by
///   `Eof`.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use trigcalc::{ParseError, parse, tokenize};
///
/// let expr = parse(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "2 ^ 3 ^ 2");
///
/// let err = parse(&tokenize("").unwrap()).unwrap_err();
/// assert_eq!(err, ParseError::EmptyExpression);
/// ```
pub fn parse(tokens: &[Lexeme]) -> ParseResult<Expr> {
    match tokens.last() {
        Some(Lexeme { token: Token::Eof, .. }) => {},
        Some(last) => {
            return Err(ParseError::UnexpectedEndOfInput { position: last.position
                                                                    + last.text.len(), });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }

    let mut iter = tokens.iter().peekable();

    if let Some(Lexeme { token: Token::Eof, .. }) = iter.peek() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some(Lexeme { token: Token::Eof, .. }) => {},
        Some(extra) => {
            return Err(ParseError::UnexpectedTrailingTokens { token:    extra.text.clone(),
                                                              position: extra.position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }

    if let Some(extra) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    extra.text.clone(),
                                                          position: extra.position, });
    }

    debug!("parsed expression: {expr}");

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, also used for function
/// arguments and parenthesized groups. It begins at the lowest-precedence
/// level, addition, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing lexemes.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    parse_additive(tokens)
}
