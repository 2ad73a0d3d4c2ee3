//! A single reported problem.

use std::fmt;

use lox_ir::{Token, TokenKind};

/// Which error channel a diagnostic belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Scanner or parser error; the program is not executed.
    Syntax,
    /// Evaluation error; the run is aborted.
    Runtime,
}

/// A reported error with its source line.
///
/// `location` is only meaningful for syntax errors: empty for scanner
/// errors, ` at end` at EOF, or ` at 'lexeme'` for a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    pub fn syntax(line: u32, location: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Syntax error pointing at a token.
    pub fn syntax_at(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic::syntax(token.line, location_of(token), message)
    }

    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Runtime,
            line,
            location: String::new(),
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_syntax(&self) -> bool {
        self.kind == DiagnosticKind::Syntax
    }

    #[inline]
    pub fn is_runtime(&self) -> bool {
        self.kind == DiagnosticKind::Runtime
    }
}

/// Location hint for a token: ` at end` for EOF, ` at 'lexeme'` otherwise.
pub fn location_of(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Syntax => write!(
                f,
                "[line {}] Error{}: {}",
                self.line, self.location, self.message
            ),
            DiagnosticKind::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}
