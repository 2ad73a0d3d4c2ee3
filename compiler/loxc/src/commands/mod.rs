//! Command handlers for the `lox` binary.
//!
//! Each submodule implements one command. Handlers return a [`RunStatus`]
//! for the program and a [`DriverError`] for failures of the driver; the
//! binary turns both into exit codes.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::run_repl;
pub use run::run_file;

use crate::error::DriverError;

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::read(path, e))
}
