//! Parse error types.
//!
//! A line either parses completely or yields the first [`ParseError`];
//! there is no recovery.

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_ir::{Span, TokenKind};

/// A parse failure at one location in the line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for diagnostics.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Where the error occurred.
    pub span: Span,
    /// Related location, e.g. the `(` an unclosed group started at.
    pub related: Option<(Span, &'static str)>,
}

impl ParseError {
    fn new(code: ErrorCode, message: String, span: Span) -> Self {
        ParseError {
            code,
            message,
            span,
            related: None,
        }
    }

    /// A character the lexer could not classify.
    pub fn invalid_character(span: Span) -> Self {
        Self::new(ErrorCode::E0001, "invalid character".to_string(), span)
    }

    /// A specific token was required but something else was found.
    pub fn unexpected_token(expected: &str, found: TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1001,
            format!("expected {expected}, found `{}`", found.display_name()),
            span,
        )
    }

    /// An operand was required but something else was found.
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1002,
            format!("expected expression, found `{}`", found.display_name()),
            span,
        )
    }

    /// A `(` with no matching `)`.
    pub fn unclosed_delimiter(open: Span, found: TokenKind, span: Span) -> Self {
        ParseError {
            related: Some((open, "unclosed `(` opened here")),
            ..Self::new(
                ErrorCode::E1003,
                format!("expected `)`, found `{}`", found.display_name()),
                span,
            )
        }
    }

    /// Tokens left over after a complete equation.
    pub fn trailing_input(found: TokenKind, span: Span) -> Self {
        Self::new(
            ErrorCode::E1004,
            format!("unexpected `{}` after end of equation", found.display_name()),
            span,
        )
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E0001 => "not part of the language",
            ErrorCode::E1004 => "expected end of line",
            _ => "",
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        if let Some((span, message)) = self.related {
            diag = diag.with_secondary_label(span, message);
        }
        diag
    }
}
