//! Token cursor for navigating the token stream.

use lox_ir::{Token, TokenKind};
use tracing::trace;

/// Position in a token slice.
///
/// Invariant: the slice is non-empty and ends with `Eof`; the cursor never
/// moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind or jump to `pos`. Used to restart after a failed expression-only attempt.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token (the current one at the start).
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check the current token's kind. Never matches `Eof` unless asked for it.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. At `Eof` this is a no-op.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(pos = self.pos, kind = %token.kind, line = token.line, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if its kind is one of `kinds`.
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.contains(&self.current_kind()) {
            Some(self.advance())
        } else {
            None
        }
    }
}
