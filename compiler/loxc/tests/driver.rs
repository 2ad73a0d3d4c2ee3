// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Driver integration tests.
//!
//! - `common`: shared helpers
//! - `files`: `run`, `lex` and `parse` on files
//! - `repl`: the interactive prompt over an in-memory session
//! - `cli`: the `lox` binary's exit codes and streams

#[path = "driver/common.rs"]
mod common;

#[path = "driver/files.rs"]
mod files;

#[path = "driver/repl.rs"]
mod repl;

#[path = "driver/cli.rs"]
mod cli;
