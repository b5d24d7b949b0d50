//! Lexer for Arith using logos with string interning.
//!
//! Lexes one program line into a `TokenList`. Whitespace is skipped; every
//! other character either forms a token or becomes `TokenKind::Error`, and
//! the list always ends with `Eof`.

use arith_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("return")]
    Return,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Eq,

    // Number with optional fraction and exponent; the evaluator decides
    // which spellings it accepts.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex one line into a `TokenList`.
///
/// # Panics
/// Panics if the line exceeds `u32::MAX` bytes.
#[tracing::instrument(level = "trace", skip(interner))]
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let kind = match token_result {
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = to_span(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));

    tracing::trace!(count = result.len(), "lexed line");
    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_else(|e| panic!("{}", e))
}

/// Convert a raw token to a `TokenKind`, interning text.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Return => TokenKind::Return,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Number => TokenKind::Number(interner.intern(slice)),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
    }
}
