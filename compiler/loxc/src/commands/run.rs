//! The `run` command.

use lox_diagnostic::SharedReporter;
use tracing::info;

use super::read_file;
use crate::error::{DriverError, RunStatus};
use crate::session::run_source;

/// Run a Lox source file.
///
/// Syntax errors are all reported before giving up; nothing executes if
/// there were any. A runtime error stops the program.
pub fn run_file(path: &str, reporter: SharedReporter) -> Result<RunStatus, DriverError> {
    let source = read_file(path)?;
    info!(path, bytes = source.len(), "running file");
    Ok(run_source(&source, reporter))
}
