use std::io::Cursor;

use pretty_assertions::assert_eq;

use loxc::{run_repl, RunStatus, Session};

use crate::common::buffer;

/// Feed `input` to a fresh prompt; return (output lines, messages, prompt text).
fn repl(input: &str) -> (Vec<String>, Vec<String>, String) {
    let reporter = buffer();
    let mut session = Session::new(reporter.clone());
    let mut prompt = Vec::new();
    run_repl(&mut session, Cursor::new(input.as_bytes()), &mut prompt).unwrap();
    (
        reporter.output_lines(),
        reporter.messages(),
        String::from_utf8(prompt).unwrap(),
    )
}

#[test]
fn bare_expressions_print_their_value() {
    let (output, messages, _) = repl("1 + 2\n\"a\" + \"b\"\nnil\n");
    assert_eq!(output, vec!["3", "ab", "nil"]);
    assert!(messages.is_empty());
}

#[test]
fn definitions_persist_between_lines() {
    let (output, _, _) = repl("var a = 1;\nfun sq(x) { return x * x; }\nsq(a + 3)\na = 5;\nprint a;\n");
    assert_eq!(output, vec!["16", "5"]);
}

#[test]
fn prompts_once_per_line_and_at_end_of_input() {
    let (_, _, prompt) = repl("1\n2\n");
    assert_eq!(prompt, "> > > ");
}

#[test]
fn errors_do_not_end_the_session() {
    let (output, messages, _) = repl("1 / 0\nprint ;\nprint \"still here\";\n");
    assert_eq!(output, vec!["still here"]);
    assert_eq!(
        messages,
        vec![
            "Divide by zero error.\n[line 1]",
            "[line 1] Error at ';': Expect expression.",
        ]
    );
}

#[test]
fn quit_stops_reading() {
    let (output, _, prompt) = repl("print 1;\n:quit\nprint 2;\n");
    assert_eq!(output, vec!["1"]);
    assert_eq!(prompt, "> > ");
}

#[test]
fn env_dumps_session_definitions() {
    let (output, _, _) = repl(":env\nvar b = \"two\";\nvar a;\n:env\n");
    assert_eq!(output, vec!["[Empty Environment]", "a = <uninitialized>", "b = two"]);
}

#[test]
fn globals_dump_shows_natives() {
    let (output, _, _) = repl(":globals\n");
    assert_eq!(output, vec!["clock = <native fn clock>"]);
}

#[test]
fn run_line_reports_status() {
    let reporter = buffer();
    let mut session = Session::new(reporter.clone());
    assert_eq!(session.run_line("var x = 1;"), RunStatus::Ok);
    assert_eq!(session.run_line("x("), RunStatus::SyntaxError);
    assert_eq!(session.run_line("x()"), RunStatus::RuntimeError);
    assert_eq!(session.run_line("x"), RunStatus::Ok);
    assert_eq!(reporter.output_lines(), vec!["1"]);
    assert!(session.env().contains("x"));
    assert!(!session.globals().contains("x"));
}
