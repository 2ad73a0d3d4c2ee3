//! Lox IR - token and syntax tree types.
//!
//! This crate holds the data shared by every stage of the interpreter:
//! - `Token`/`TokenKind` produced by `lox_lexer`
//! - `Expr`/`Stmt` produced by `lox_parse` and consumed by `lox_eval`
//! - an s-expression printer for debugging parsed programs
//!
//! Nothing in here has behavior beyond construction and display.

pub mod ast;
pub mod printer;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDecl, LiteralValue, LogicalOp, Stmt, UnaryOp};
pub use token::{Token, TokenKind, TokenLiteral};
