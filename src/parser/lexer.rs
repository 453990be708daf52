use std::{
    fmt,
    fmt::{Display, Formatter},
};

use logos::Logos;

use crate::{
    errors::{LexError, Result},
    parser::span::Span,
};

/// The raw output of the lexer generator. Mapped into [`Token`] before the
/// parser sees anything, so the `Eof` sentinel can be attached.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\x0b\x0c\r\n]+")]
enum RawToken {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// A maximal run of decimal digits. Overflowing `i64` is a lex error.
    #[regex("[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
}

/// The kind of a single lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Int(i64),

    /// Sentinel that terminates every token sequence, exactly once.
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Int(_) => "a number",
            TokenKind::Eof => "end of input",
        };

        write!(f, "{}", s)
    }
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Int(value) => TokenKind::Int(value),
        }
    }
}

/// A single lexical unit, with the span of the input text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Turn `input` into a flat token sequence, ending in exactly one `Eof` token.
///
/// Every character of the input is either whitespace, an operator, or part of
/// a number. Anything else fails with a [`LexError`] pointing at the offending
/// offset; nothing is silently skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = RawToken::lexer(input);
    let mut tokens = vec![];

    while let Some(raw) = lexer.next() {
        let span = Span::new(lexer.span());

        match raw {
            Ok(t) => tokens.push(Token {
                kind: t.into(),
                span,
            }),
            Err(()) => return Err(LexError::new("expected a number", span).into()),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(input.len()..input.len()),
    });

    Ok(tokens)
}
