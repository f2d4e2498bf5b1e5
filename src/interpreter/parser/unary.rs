use std::iter::Peekable;

use crate::{
    ast::{Expr, Function, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::{consume_opening_paren, expect_closing_paren, peek_lexeme},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-recursive, so `--x` is `-(-x)`, and it binds looser than `^`:
/// `-2^2` is `-(2^2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    if let Some(&lexeme) = tokens.peek()
       && lexeme.token == Token::Minus
    {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                           expr:     Box::new(expr),
                           position: lexeme.position, })
    } else {
        parse_power(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals and the constants `pi` and `e`
/// - variables
/// - function calls
/// - parenthesized expressions
///
/// A token that cannot start any of these is an error. This is where inputs
/// such as `3+*4` or `3++4` fail: the operand after the first `+` is missing.
///
/// Grammar:
/// ```text
///     primary := NUMBER | PI | E | VAR
///              | ("sin" | "cos" | "tan") "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let lexeme = peek_lexeme(tokens)?;

    match &lexeme.token {
        Token::Number(value) | Token::Pi(value) | Token::E(value) => {
            tokens.next();
            Ok(Expr::Number { value:    *value,
                              position: lexeme.position, })
        },
        Token::Var(name) => {
            tokens.next();
            Ok(Expr::Variable { name:     name.clone(),
                                position: lexeme.position, })
        },
        Token::Sin | Token::Cos | Token::Tan => parse_function_call(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Eof => Err(ParseError::UnexpectedEndOfInput { position: lexeme.position }),
        _ => Err(ParseError::UnexpectedToken { token:    lexeme.text.clone(),
                                               position: lexeme.position, }),
    }
}

/// Parses a call to a built-in function.
///
/// The function name must be followed immediately by `(`; `sin1` or `sin x`
/// are rejected rather than being read as a variable or an implicit call.
///
/// Grammar: `call := ("sin" | "cos" | "tan") "(" expression ")"`
///
/// # Errors
/// - `ExpectedFunctionParen` if the name is not followed by `(`.
/// - `ExpectedClosingParen` if the argument is not closed, including `sin(`
///   at the end of the input.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let name = peek_lexeme(tokens)?;
    let function = match token_to_function(&name.token) {
        Some(function) => function,
        None => {
            return Err(ParseError::UnexpectedToken { token:    name.text.clone(),
                                                     position: name.position, });
        },
    };
    tokens.next();

    let open = peek_lexeme(tokens)?;
    if open.token != Token::LParen {
        return Err(ParseError::ExpectedFunctionParen { function: name.text.clone(),
                                                       found:    open.describe(),
                                                       position: open.position, });
    }
    consume_opening_paren(tokens)?;

    let argument = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;

    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument),
                            position: name.position })
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// Grouping produces no node of its own; the inner expression is returned
/// directly.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    consume_opening_paren(tokens)?;
    let expr = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;
    Ok(expr)
}

/// Maps a function-name token to the function it calls.
#[must_use]
pub const fn token_to_function(token: &Token) -> Option<Function> {
    match token {
        Token::Sin => Some(Function::Sin),
        Token::Cos => Some(Function::Cos),
        Token::Tan => Some(Function::Tan),
        _ => None,
    }
}
