//! Token types produced by the scanner.

use std::fmt;

/// A single lexeme with its kind, raw text and source line.
///
/// Tokens are immutable once scanned. Only `String` and `Number` tokens
/// carry a literal payload.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub literal: Option<TokenLiteral>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            literal: None,
        }
    }

    /// Create a token carrying a literal value (`String` or `Number`).
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: u32,
        literal: TokenLiteral,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            literal: Some(literal),
        }
    }

    /// The synthetic end-of-input token.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    /// Create an identifier token, used by tests and desugaring.
    pub fn ident(name: &str, line: u32) -> Self {
        Token::new(TokenKind::Identifier, name, line)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(lit) => write!(f, "{:?}({lit}) @{}", self.kind, self.line),
            None if self.kind.is_fixed_text() => write!(f, "{:?} @{}", self.kind, self.line),
            None => write!(f, "{:?}({:?}) @{}", self.kind, self.lexeme, self.line),
        }
    }
}

/// Literal payload of a `String` or `Number` token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenLiteral {
    Str(String),
    Number(f64),
}

impl fmt::Display for TokenLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenLiteral::Str(s) => write!(f, "{s:?}"),
            TokenLiteral::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Colon,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Break,
    Class,
    Continue,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Look up a reserved word. Matching is case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "and" => TokenKind::And,
            "break" => TokenKind::Break,
            "class" => TokenKind::Class,
            "continue" => TokenKind::Continue,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind always has the same lexeme (punctuation and keywords).
    pub fn is_fixed_text(self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier | TokenKind::String | TokenKind::Number
        )
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Break
                | TokenKind::Class
                | TokenKind::Continue
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Canonical upper-snake name, as shown by `lox lex`.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Colon => "COLON",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Break => "BREAK",
            TokenKind::Class => "CLASS",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("While"), None);
        assert_eq!(TokenKind::keyword("whilex"), None);
    }

    #[test]
    fn every_keyword_round_trips_through_lookup() {
        for word in [
            "and", "break", "class", "continue", "else", "false", "for", "fun", "if", "nil",
            "or", "print", "return", "super", "this", "true", "var", "while",
        ] {
            let kind = TokenKind::keyword(word);
            assert!(kind.is_some_and(TokenKind::is_keyword), "{word}");
        }
    }

    #[test]
    fn debug_shows_literal_payload() {
        let tok = Token::with_literal(TokenKind::Number, "1.5", 3, TokenLiteral::Number(1.5));
        assert_eq!(format!("{tok:?}"), "Number(1.5) @3");

        let ident = Token::ident("count", 1);
        assert_eq!(format!("{ident:?}"), "Identifier(\"count\") @1");

        let plus = Token::new(TokenKind::Plus, "+", 2);
        assert_eq!(format!("{plus:?}"), "Plus @2");
    }
}
