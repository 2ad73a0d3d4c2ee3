//! Parenthesized s-expression rendering of the syntax tree.
//!
//! A debugging aid for `lox parse`; the output format is not stable.

use std::fmt::Write;

use crate::ast::{Expr, Stmt};

/// Render a statement list, one top-level statement per line.
pub fn print_stmts(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in stmts {
        write_stmt(&mut out, stmt);
        out.push('\n');
    }
    out
}

/// Render one expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(value) => {
            let _ = write!(out, "{value}");
        }
        Expr::Unary { op, expr, .. } => parenthesize(out, op.as_symbol(), &[expr]),
        Expr::Binary {
            left, op, right, ..
        } => parenthesize(out, op.as_symbol(), &[left, right]),
        Expr::Logical { left, op, right } => parenthesize(out, op.as_symbol(), &[left, right]),
        Expr::Grouping(inner) => parenthesize(out, "group", &[inner]),
        Expr::Variable(name) => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            let _ = write!(out, "(= {} ", name.lexeme);
            write_expr(out, value);
            out.push(')');
        }
        Expr::Call { callee, args, .. } => {
            out.push_str("(call ");
            write_expr(out, callee);
            for arg in args {
                out.push(' ');
                write_expr(out, arg);
            }
            out.push(')');
        }
    }
}

fn parenthesize(out: &mut String, name: &str, exprs: &[&Expr]) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_expr(out, expr);
    }
    out.push(')');
}

fn write_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Expression(expr) => {
            out.push_str("(; ");
            write_expr(out, expr);
            out.push(')');
        }
        Stmt::Print(expr) => {
            out.push_str("(print ");
            write_expr(out, expr);
            out.push(')');
        }
        Stmt::Var { name, initializer } => {
            let _ = write!(out, "(var {}", name.lexeme);
            if let Some(init) = initializer {
                out.push(' ');
                write_expr(out, init);
            }
            out.push(')');
        }
        Stmt::Block(stmts) => {
            out.push_str("(block");
            write_body(out, stmts);
            out.push(')');
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("(if ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, then_branch);
            if let Some(else_branch) = else_branch {
                out.push(' ');
                write_stmt(out, else_branch);
            }
            out.push(')');
        }
        Stmt::While { condition, body } => {
            out.push_str("(while ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, body);
            out.push(')');
        }
        Stmt::Break { label, .. } => match label {
            Some(label) => {
                let _ = write!(out, "(break {})", label.lexeme);
            }
            None => out.push_str("(break)"),
        },
        Stmt::Continue { label, .. } => match label {
            Some(label) => {
                let _ = write!(out, "(continue {})", label.lexeme);
            }
            None => out.push_str("(continue)"),
        },
        Stmt::Label { label, body } => {
            let _ = write!(out, "(label {} ", label.lexeme);
            write_stmt(out, body);
            out.push(')');
        }
        Stmt::ContinuePoint { label, body } => {
            out.push_str("(continue-point ");
            if let Some(label) = label {
                out.push_str(&label.lexeme);
                out.push(' ');
            }
            write_stmt(out, body);
            out.push(')');
        }
        Stmt::Function(decl) => {
            let _ = write!(out, "(fun {} (", decl.name.lexeme);
            let params: Vec<&str> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
            out.push_str(&params.join(" "));
            out.push(')');
            write_body(out, &decl.body);
            out.push(')');
        }
        Stmt::Return { value, .. } => {
            out.push_str("(return ");
            write_expr(out, value);
            out.push(')');
        }
    }
}

fn write_body(out: &mut String, stmts: &[Stmt]) {
    for stmt in stmts {
        out.push(' ');
        write_stmt(out, stmt);
    }
}
