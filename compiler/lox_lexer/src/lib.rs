//! Scanner for Lox.
//!
//! One left-to-right pass over the source producing a `Vec<Token>` that
//! always ends in a single `Eof` token. Errors (unexpected characters,
//! unterminated strings) are reported through the [`Reporter`] and scanning
//! carries on, so one pass surfaces every lexical problem.

mod cursor;

use cursor::Cursor;
use lox_diagnostic::Reporter;
use lox_ir::{Token, TokenKind, TokenLiteral};
use tracing::trace;

/// Scan `source` into tokens.
pub fn scan(source: &str, reporter: &dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// Scanner state.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    reporter: &'a dyn Reporter,
    tokens: Vec<Token>,
    /// Byte offset where the token being scanned starts.
    start: usize,
    line: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a dyn Reporter) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            reporter,
            tokens: Vec::new(),
            start: 0,
            line: 1,
        }
    }

    /// Consume the scanner and return every token, `Eof` last.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        trace!(count = self.tokens.len(), lines = self.line, "scanned");
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.cursor.bump();
        match c {
            b'(' => self.add(TokenKind::LeftParen),
            b')' => self.add(TokenKind::RightParen),
            b'{' => self.add(TokenKind::LeftBrace),
            b'}' => self.add(TokenKind::RightBrace),
            b',' => self.add(TokenKind::Comma),
            b'.' => self.add(TokenKind::Dot),
            b'-' => self.add(TokenKind::Minus),
            b'+' => self.add(TokenKind::Plus),
            b';' => self.add(TokenKind::Semicolon),
            b':' => self.add(TokenKind::Colon),
            b'*' => self.add(TokenKind::Star),
            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.eat(b'/') {
                    self.cursor.skip_to_newline();
                } else {
                    self.add(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => {
                if !c.is_ascii() {
                    self.cursor.finish_char(self.start);
                }
                self.reporter
                    .syntax_error(self.line, "", "Unexpected character.");
            }
        }
    }

    fn add(&mut self, kind: TokenKind) {
        let text = self.cursor.slice(self.start, self.cursor.pos());
        self.tokens.push(Token::new(kind, text, self.line));
    }

    fn add_literal(&mut self, kind: TokenKind, literal: TokenLiteral) {
        let text = self.cursor.slice(self.start, self.cursor.pos());
        self.tokens
            .push(Token::with_literal(kind, text, self.line, literal));
    }

    /// Two-character operator if the next byte is `second`, else one-character.
    fn add_either(&mut self, second: u8, double: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(second) {
            double
        } else {
            single
        };
        self.add(kind);
    }

    fn string(&mut self) {
        self.line += self.cursor.skip_to_quote();

        if self.cursor.is_eof() {
            self.reporter
                .syntax_error(self.line, "", "Unterminated string.");
            return;
        }

        // The closing quote.
        self.cursor.bump();

        let value = self.cursor.slice(self.start + 1, self.cursor.pos() - 1);
        self.add_literal(TokenKind::String, TokenLiteral::Str(value.to_string()));
    }

    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // A fraction needs a digit after the dot; `1.` is NUMBER DOT.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.bump();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let text = self.cursor.slice(self.start, self.cursor.pos());
        match text.parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, TokenLiteral::Number(value)),
            Err(_) => self
                .reporter
                .syntax_error(self.line, "", "Invalid number literal."),
        }
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_alphanumeric);
        let text = self.cursor.slice(self.start, self.cursor.pos());
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }
}

#[inline]
fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_alphanumeric(b: u8) -> bool {
    is_alpha(b) || b.is_ascii_digit()
}

#[cfg(test)]
mod tests;
