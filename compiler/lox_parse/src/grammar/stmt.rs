//! Declaration and statement parsing.
//!
//! Loops are desugared here: `for` becomes a block around a `while`, and
//! every loop body is wrapped in a `ContinuePoint` so `continue` resumes at
//! the increment. `break`/`continue`/`return` are validated against the
//! static context before any code runs.

use std::rc::Rc;

use lox_ir::{Expr, FunctionDecl, LiteralValue, Stmt, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use super::MAX_ARGS;
use crate::context::ParseContext;
use crate::error::ParseResult;
use crate::Parser;

impl Parser<'_> {
    /// Parse one declaration, recovering on error.
    ///
    /// Returns `None` when the declaration failed; the error has been
    /// reported and the cursor sits at the next statement boundary.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.eat(TokenKind::Var) {
            self.var_declaration()
        } else if self.eat(TokenKind::Fun) {
            self.function("function")
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.expect(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

        Ok(Stmt::Var {
            name: name.clone(),
            initializer,
        })
    }

    fn function(&mut self, kind: &str) -> ParseResult<Stmt> {
        let name = self.expect(TokenKind::Identifier, &format!("Expect {kind} name."))?;
        self.expect(
            TokenKind::LeftParen,
            &format!("Expect '(' after {kind} name."),
        )?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    self.report(self.current(), "Can't have more than 255 parameters.");
                }
                let param = self.expect(TokenKind::Identifier, "Expect parameter name.")?;
                params.push(param.clone());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.expect(
            TokenKind::LeftBrace,
            &format!("Expect '{{' before {kind} body."),
        )?;

        let body = self.in_function_body(Self::block)?;
        trace!(name = %name.lexeme, arity = params.len(), "function declaration");

        Ok(Stmt::Function(Rc::new(FunctionDecl {
            name: name.clone(),
            params,
            body,
        })))
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            let Some(token) = self.eat_any(&[
                TokenKind::Print,
                TokenKind::LeftBrace,
                TokenKind::If,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Break,
                TokenKind::Continue,
                TokenKind::Return,
                TokenKind::Colon,
            ]) else {
                return self.expression_statement();
            };

            match token.kind {
                TokenKind::Print => self.print_statement(),
                TokenKind::LeftBrace => Ok(Stmt::Block(self.block()?)),
                TokenKind::If => self.if_statement(),
                TokenKind::While => self.while_statement(),
                TokenKind::For => self.for_statement(),
                TokenKind::Break => self.break_statement(),
                TokenKind::Continue => self.continue_statement(),
                TokenKind::Return => self.return_statement(),
                _ => self.labeled_statement(),
            }
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Statements up to the closing `}`. The `{` has been consumed.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `while (cond) body` becomes `While { cond, ContinuePoint { label, body } }`.
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        let label = self.pending_loop_label.take();

        self.expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expect ')' after condition.")?;

        let body = self.loop_body()?;

        Ok(Stmt::While {
            condition,
            body: Box::new(Stmt::ContinuePoint {
                label,
                body: Box::new(body),
            }),
        })
    }

    /// Desugar `for (init; cond; incr) body` into
    /// `{ init; while (cond) { ContinuePoint { label, body } incr; } }`.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        let label = self.pending_loop_label.take();

        self.expect(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.eat(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let body = self.loop_body()?;

        let mut iteration = vec![Stmt::ContinuePoint {
            label,
            body: Box::new(body),
        }];
        if let Some(increment) = increment {
            iteration.push(Stmt::Expression(increment));
        }

        let condition = condition.unwrap_or_else(|| Expr::literal(LiteralValue::Bool(true)));
        let while_loop = Stmt::While {
            condition,
            body: Box::new(Stmt::Block(iteration)),
        };

        Ok(Stmt::Block(initializer.into_iter().chain([while_loop]).collect()))
    }

    fn loop_body(&mut self) -> ParseResult<Stmt> {
        self.with_context(ParseContext::IN_LOOP, Self::statement)
    }

    /// `:NAME stmt`. The `:` has been consumed.
    fn labeled_statement(&mut self) -> ParseResult<Stmt> {
        let label = self.expect(TokenKind::Identifier, "Expect label name after ':'.")?;

        let target = self.current();
        let is_loop = matches!(target.kind, TokenKind::For | TokenKind::While);
        if !is_loop && !matches!(target.kind, TokenKind::If | TokenKind::LeftBrace) {
            return Err(self.error_at(target, "Expect loop, if or block after label."));
        }

        let body = self.with_label(&label.lexeme, is_loop, |p| {
            if is_loop {
                p.pending_loop_label = Some(label.clone());
            }
            p.statement()
        })?;

        Ok(Stmt::Label {
            label: label.clone(),
            body: Box::new(body),
        })
    }

    fn break_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let label = self.optional_label();
        self.expect(TokenKind::Semicolon, "Expect ';' after 'break'.")?;

        match &label {
            Some(name) if !self.labels.has_label(&name.lexeme) => {
                let message = format!("No enclosing label named '{}'.", name.lexeme);
                self.report(name, &message);
            }
            None if self.labels.is_empty() && !self.context.in_loop() => {
                self.report(&keyword, "Can't use 'break' outside of a loop or label.");
            }
            _ => {}
        }

        Ok(Stmt::Break { keyword, label })
    }

    fn continue_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let label = self.optional_label();
        self.expect(TokenKind::Semicolon, "Expect ';' after 'continue'.")?;

        match &label {
            Some(name) if !self.labels.has_loop_label(&name.lexeme) => {
                let message = format!("No enclosing loop labeled '{}'.", name.lexeme);
                self.report(name, &message);
            }
            None if !self.context.in_loop() => {
                self.report(&keyword, "Can't use 'continue' outside of a loop.");
            }
            _ => {}
        }

        Ok(Stmt::Continue { keyword, label })
    }

    fn optional_label(&mut self) -> Option<Token> {
        if self.check(TokenKind::Identifier) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        if !self.context.in_function() {
            self.report(&keyword, "Can't return from top-level code.");
        }

        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;

        Ok(Stmt::Return { keyword, value })
    }
}
