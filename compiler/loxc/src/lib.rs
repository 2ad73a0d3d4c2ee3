//! Lox driver.
//!
//! Ties the scanner, parser and interpreter together behind a small set of
//! commands used by the `lox` binary:
//! - `run`: execute a source file
//! - `repl`: interactive prompt with a persistent session
//! - `lex`/`parse`: dump the token stream or the parsed program
//!
//! Everything writes through a [`Reporter`](lox_diagnostic::Reporter), so
//! the same entry points serve the console and the integration tests.

pub mod commands;
mod error;
mod session;
mod tracing_setup;

pub use commands::{lex_file, lex_source, parse_file, parse_source, read_file, run_file, run_repl};
pub use error::{DriverError, RunStatus, EXIT_IO, EXIT_RUNTIME, EXIT_SYNTAX, EXIT_USAGE};
pub use session::{run_source, Session};
pub use tracing_setup::init_tracing;
