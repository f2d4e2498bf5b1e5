use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
    },
};

/// Returns the next lexeme without consuming it.
///
/// A well-formed token sequence always ends in `Eof`, so running out of
/// lexemes means the caller was handed a truncated sequence.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the iterator is exhausted.
pub(in crate::interpreter::parser) fn peek_lexeme<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme>
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })
}

/// Consumes the `)` that closes a group or a function argument.
///
/// # Errors
/// Returns `ExpectedClosingParen` naming the token found instead, which is
/// `end of input` for an unclosed group such as `(3+4`.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme>
{
    let lexeme = peek_lexeme(tokens)?;
    if lexeme.token == Token::RParen {
        tokens.next();
        return Ok(());
    }
    Err(ParseError::ExpectedClosingParen { found:    lexeme.describe(),
                                           position: lexeme.position, })
}

/// Consumes the `(` that opens a group or a function argument.
///
/// An opening parenthesis at the very end of the input is reported as an
/// unclosed group rather than as a missing operand, since the `)` is what the
/// user most likely forgot.
///
/// # Errors
/// Returns `ExpectedClosingParen` if nothing follows the `(`.
pub(in crate::interpreter::parser) fn consume_opening_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme>
{
    tokens.next();
    let lexeme = peek_lexeme(tokens)?;
    if lexeme.token == Token::Eof {
        return Err(ParseError::ExpectedClosingParen { found:    lexeme.describe(),
                                                      position: lexeme.position, });
    }
    Ok(())
}
