//! The interactive prompt.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::DriverError;
use crate::session::Session;

const PROMPT: &str = "> ";

/// Read lines from `input` and run each in `session` until end of input
/// or `:quit`.
///
/// The prompt goes to `prompt_out`; program output and diagnostics go
/// through the session's reporter. Errors in one line do not end the loop.
///
/// Commands:
/// - `:env` prints the session's definitions
/// - `:globals` prints the global frame
/// - `:quit` leaves the prompt
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut prompt_out: W,
) -> Result<(), DriverError> {
    let mut line = String::new();
    loop {
        prompt_out.write_all(PROMPT.as_bytes())?;
        prompt_out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(());
        }

        match line.trim() {
            "" => {}
            ":quit" => return Ok(()),
            ":env" => session.reporter().print(&session.env().dump()),
            ":globals" => session.reporter().print(&session.globals().dump()),
            source => {
                let status = session.run_line(source);
                debug!(?status, "line done");
            }
        }
    }
}
