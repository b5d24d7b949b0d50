//! Token cursor for navigating the token stream.

use arith_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over one line's tokens.
///
/// Invariant: the token list ends with `Eof` and the cursor never moves past
/// it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(!tokens.is_empty(), "token list must end with Eof");
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Check if at end of line.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is `kind`.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            trace!(?token, pos = self.pos, "advance");
            self.pos += 1;
        }
        token
    }
}
