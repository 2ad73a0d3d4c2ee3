//! Expression parsing.
//!
//! Precedence, lowest to highest:
//! assignment, `or`, `and`, equality, comparison, term, factor, unary, call,
//! primary. Binary levels are left-associative; assignment is
//! right-associative.

use lox_ir::{BinaryOp, Expr, LiteralValue, LogicalOp, TokenKind, TokenLiteral, UnaryOp};
use lox_stack::ensure_sufficient_stack;

use super::MAX_ARGS;
use crate::error::ParseResult;
use crate::Parser;

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.eat(TokenKind::Equal) {
            let equals = self.previous();
            let value = self.assignment()?;

            if let Expr::Variable(name) = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                });
            }
            self.report(equals, "Invalid assignment target.");
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.eat(TokenKind::Or) {
            let right = self.and()?;
            expr = Expr::logical(expr, LogicalOp::Or, right);
        }
        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;
        while self.eat(TokenKind::And) {
            let right = self.equality()?;
            expr = Expr::logical(expr, LogicalOp::And, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// One left-associative binary level: `operand (op operand)*`.
    fn binary_level(
        &mut self,
        ops: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;
        while let Some(op_token) = self.eat_any(ops) {
            let Some(op) = binary_op(op_token.kind) else {
                break;
            };
            let right = operand(self)?;
            expr = Expr::binary(expr, op, op_token.line, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(op_token) = self.eat_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = if op_token.kind == TokenKind::Bang {
                UnaryOp::Not
            } else {
                UnaryOp::Negate
            };
            let operand = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(op, op_token.line, operand));
        }
        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    self.report(self.current(), "Can't have more than 255 arguments.");
                }
                args.push(self.expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self.expect(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
            paren: paren.clone(),
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.current();
        let expr = match token.kind {
            TokenKind::False => Expr::literal(LiteralValue::Bool(false)),
            TokenKind::True => Expr::literal(LiteralValue::Bool(true)),
            TokenKind::Nil => Expr::literal(LiteralValue::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::literal(literal_value(token.literal.as_ref()))
            }
            TokenKind::Identifier => Expr::Variable(token.clone()),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping(Box::new(inner)));
            }
            _ => return Err(self.error_at(token, "Expect expression.")),
        };
        self.advance();
        Ok(expr)
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::EqualEqual => BinaryOp::Equal,
        TokenKind::BangEqual => BinaryOp::NotEqual,
        TokenKind::Greater => BinaryOp::Greater,
        TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
        TokenKind::Less => BinaryOp::Less,
        TokenKind::LessEqual => BinaryOp::LessEqual,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Subtract,
        TokenKind::Star => BinaryOp::Multiply,
        TokenKind::Slash => BinaryOp::Divide,
        _ => return None,
    })
}

fn literal_value(literal: Option<&TokenLiteral>) -> LiteralValue {
    match literal {
        Some(TokenLiteral::Number(n)) => LiteralValue::Number(*n),
        Some(TokenLiteral::Str(s)) => LiteralValue::Str(s.as_str().into()),
        None => LiteralValue::Nil,
    }
}
