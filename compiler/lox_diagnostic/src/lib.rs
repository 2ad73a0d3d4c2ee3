//! Diagnostics for the Lox interpreter.
//!
//! Two independent error channels flow through here:
//! - syntax errors from the scanner and parser (`[line N] Error at 'x': ...`)
//! - runtime errors from the evaluator (`message` then `[line N]`)
//!
//! The core only talks to the [`Reporter`] trait; where the text ends up is
//! the host's decision.

mod diagnostic;
pub mod reporter;

pub use diagnostic::{location_of, Diagnostic, DiagnosticKind};
pub use reporter::{console_reporter, BufferReporter, ConsoleReporter, Reporter, SharedReporter};
