use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Why logos rejected a slice of input.
///
/// The lexer only knows the kind of failure; [`tokenize`] attaches the
/// offending text and position when converting it into a [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    InvalidCharacter,
    /// A numeric literal was directly followed by another `.`.
    MalformedNumber,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `5.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `sin`, also accepted as `sen`.
    #[token("sin")]
    #[token("sen")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// The constant `pi`, carrying π.
    #[token("pi", |_| std::f64::consts::PI)]
    Pi(f64),
    /// The constant `e`, carrying Euler's number. Wins over `Var` on an exact
    /// match only; `ex` is a variable.
    #[token("e", |_| std::f64::consts::E, priority = 3)]
    E(f64),
    /// Identifier tokens; free variable names such as `x` or `angle`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Var(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by logos; [`tokenize`] appends it.
    Eof,
}

impl Token {
    /// Returns the numeric payload of `Number`, `Pi` and `E` tokens.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Pi(v) | Self::E(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the upper-case kind name of the token, e.g. `NUMBER` or
    /// `L_PAREN`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Tan => "TAN",
            Self::Pi(_) => "PI",
            Self::E(_) => "E",
            Self::Var(_) => "VAR",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MULTI",
            Self::Slash => "DIV",
            Self::Caret => "POW",
            Self::LParen => "L_PAREN",
            Self::RParen => "R_PAREN",
            Self::Eof => "EOF",
        }
    }
}

/// A token together with the text it was read from and its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The classified token.
    pub token:    Token,
    /// The exact source text of the token. Empty for `Eof`.
    pub text:     String,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Lexeme {
    /// Describes the lexeme for diagnostics: the quoted text, or
    /// `end of input` for `Eof`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.token {
            Token::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {:<10} @{}", self.token.kind_name(), self.describe(), self.position)?;
        if let Some(v) = self.token.value() {
            write!(f, " = {v}")?;
        }
        Ok(())
    }
}

/// Parses a numeric literal from the current token slice.
///
/// At most one decimal point belongs to a literal. If the literal is directly
/// followed by another `.`, the input is rejected instead of being split into
/// two numbers.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(MalformedNumber)`: If a second decimal point follows.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    if lex.remainder().starts_with('.') {
        return Err(LexErrorKind::MalformedNumber);
    }
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Turns the source string into a token sequence.
///
/// Whitespace between tokens is skipped. The returned sequence always ends
/// with exactly one [`Token::Eof`], positioned at the end of the input; an
/// empty input therefore yields just `[Eof]`.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for a character that cannot start a
///   token.
/// - [`LexError::MalformedNumber`] for a literal with a second decimal point,
///   such as `5..3`.
///
/// # Example
/// ```
/// use trigcalc::{Token, tokenize};
///
/// let tokens = tokenize("2 * pi").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|l| l.token.kind_name()).collect();
/// assert_eq!(kinds, ["NUMBER", "MULTI", "PI", "EOF"]);
/// assert_eq!(tokens[2].token, Token::Pi(std::f64::consts::PI));
/// assert_eq!(tokens[2].position, 4);
///
/// assert!(tokenize("5..3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: lexer.slice().to_string(),
                                               position: span.start }),
            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { literal:  lexer.slice().to_string(),
                                                       position: span.end, });
            },
            Err(LexErrorKind::InvalidCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::InvalidCharacter { character,
                                                        position: span.start });
            },
        }
    }

    lexemes.push(Lexeme { token:    Token::Eof,
                          text:     String::new(),
                          position: source.len(), });
    trace!("tokenized {:?} into {} tokens", source, lexemes.len());

    Ok(lexemes)
}
