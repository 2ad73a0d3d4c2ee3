#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use lox_diagnostic::BufferReporter;
use pretty_assertions::assert_eq;

fn scan_kinds(source: &str) -> Vec<TokenKind> {
    let reporter = BufferReporter::new();
    scan(source, &reporter).iter().map(|t| t.kind).collect()
}

fn scan_with_errors(source: &str) -> (Vec<Token>, Vec<String>) {
    let reporter = BufferReporter::new();
    let tokens = scan(source, &reporter);
    (tokens, reporter.messages())
}

#[test]
fn grouped_arithmetic() {
    let reporter = BufferReporter::new();
    let tokens = scan("(1+2)*3", &reporter);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].literal, Some(TokenLiteral::Number(1.0)));
    assert_eq!(tokens[3].literal, Some(TokenLiteral::Number(2.0)));
    assert_eq!(tokens[6].literal, Some(TokenLiteral::Number(3.0)));
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn empty_source_is_just_eof() {
    let (tokens, errors) = scan_with_errors("");
    assert_eq!(tokens, vec![Token::eof(1)]);
    assert!(errors.is_empty());
}

#[test]
fn two_character_operators_use_maximal_munch() {
    assert_eq!(
        scan_kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        scan_kinds("!=="),
        vec![TokenKind::BangEqual, TokenKind::Equal, TokenKind::Eof]
    );
}

#[test]
fn line_comment_emits_nothing() {
    let (tokens, _) = scan_with_errors("1 // ignored ) ( \n/ 2");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(scan_kinds("// only a comment"), vec![TokenKind::Eof]);
}

#[test]
fn string_literal_strips_quotes() {
    let (tokens, errors) = scan_with_errors("\"hello world\"");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(
        tokens[0].literal,
        Some(TokenLiteral::Str("hello world".to_string()))
    );
}

#[test]
fn multiline_string_advances_line() {
    let (tokens, _) = scan_with_errors("\"a\nb\nc\" x");
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Str("a\nb\nc".into())));
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn unterminated_string_is_reported_and_scanning_finishes() {
    let (tokens, errors) = scan_with_errors("var s = \"open\nstill open");
    assert_eq!(errors, vec!["[line 2] Error: Unterminated string."]);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens.last().map(|t| t.line), Some(2));
}

#[test]
fn numbers_have_no_leading_or_trailing_dot() {
    let (tokens, _) = scan_with_errors("12.5 .5 7.");
    let summary: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Number, "12.5"),
            (TokenKind::Dot, "."),
            (TokenKind::Number, "5"),
            (TokenKind::Number, "7"),
            (TokenKind::Dot, "."),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Number(12.5)));
}

#[test]
fn no_exponent_syntax() {
    assert_eq!(
        scan_kinds("1e3"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(
        scan_kinds("var Var fun _under break continue class this super"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Fun,
            TokenKind::Identifier,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Class,
            TokenKind::This,
            TokenKind::Super,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifier_keeps_digits_and_underscores() {
    let (tokens, _) = scan_with_errors("orchid_2 or");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "orchid_2");
    assert_eq!(tokens[1].kind, TokenKind::Or);
}

#[test]
fn unexpected_characters_are_reported_and_skipped() {
    let (tokens, errors) = scan_with_errors("1 @ 2\n# é 3");
    assert_eq!(
        errors,
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 2] Error: Unexpected character.",
            "[line 2] Error: Unexpected character.",
        ]
    );
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["1", "2", "3", ""]);
}

#[test]
fn label_syntax_scans_colon() {
    assert_eq!(
        scan_kinds(":outer for"),
        vec![
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::For,
            TokenKind::Eof
        ]
    );
}

#[test]
fn eof_carries_final_line() {
    let (tokens, _) = scan_with_errors("a\nb\n\n");
    assert_eq!(tokens.last(), Some(&Token::eof(4)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn always_ends_with_single_eof(source in "\\PC{0,64}") {
            let reporter = BufferReporter::new();
            let tokens = scan(&source, &reporter);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        }

        #[test]
        fn scanning_is_deterministic(source in "[a-z0-9 ;(){}+*/<>=!\"\n.-]{0,80}") {
            let first = scan(&source, &BufferReporter::new());
            let second = scan(&source, &BufferReporter::new());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn lexemes_are_source_substrings(source in "[a-z0-9 ;(){}+*<>=!.-]{0,80}") {
            let reporter = BufferReporter::new();
            for token in scan(&source, &reporter) {
                prop_assert!(source.contains(token.lexeme.as_str()));
            }
        }
    }
}
