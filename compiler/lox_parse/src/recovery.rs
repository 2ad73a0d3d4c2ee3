//! Error recovery for the parser.
//!
//! After a syntax error the parser discards tokens until it reaches a likely
//! statement boundary, then resumes, so a single run reports many errors.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds as a bitset over the `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u8))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind as u8)) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keywords that begin a statement. Recovery stops in front of them.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens up to the next statement boundary.
///
/// Always consumes at least one token (unless already at `Eof`), then stops
/// just after a `;` or just before a [`STATEMENT_START`] keyword.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon {
            return;
        }
        if STATEMENT_START.contains(cursor.current_kind()) {
            return;
        }
        cursor.advance();
    }
}
