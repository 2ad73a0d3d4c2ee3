use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

use crate::common::{path_of, source_file};

fn lox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run lox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn runs_a_file() {
    let file = source_file("for (var i = 0; i < 3; i = i + 1) print i;");
    let output = lox(&[path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0\n1\n2\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn run_subcommand_matches_bare_path() {
    let file = source_file("print \"ok\";");
    let output = lox(&["run", path_of(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "ok\n");
}

#[test]
fn syntax_error_exits_65() {
    let file = source_file("print 1 +;");
    let output = lox(&[path_of(&file)]);
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stderr(&output), "[line 1] Error at ';': Expect expression.\n");
    assert_eq!(stdout(&output), "");
}

#[test]
fn runtime_error_exits_70() {
    let file = source_file("print 1;\nprint 1 / 0;");
    let output = lox(&[path_of(&file)]);
    assert_eq!(output.status.code(), Some(70));
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(stderr(&output), "Divide by zero error.\n[line 2]\n");
}

#[test]
fn missing_file_exits_74() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.lox");
    let output = lox(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(74));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn usage_errors_exit_64() {
    assert_eq!(lox(&["run"]).status.code(), Some(64));
    assert_eq!(lox(&["--bogus"]).status.code(), Some(64));
    assert_eq!(lox(&["a.lox", "b.lox"]).status.code(), Some(64));
}

#[test]
fn prompt_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lox"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lox");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"var a = 2;\na * 21\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "> > 42\n> ");
}
