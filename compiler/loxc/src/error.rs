//! Driver errors and process exit codes.

use std::io;

/// Command line misuse.
pub const EXIT_USAGE: i32 = 64;
/// The program had syntax errors and was not run.
pub const EXIT_SYNTAX: i32 = 65;
/// The program stopped on a runtime error.
pub const EXIT_RUNTIME: i32 = 70;
/// A file or terminal could not be read or written.
pub const EXIT_IO: i32 = 74;

/// How a program run ended. Diagnostics have already been reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    SyntaxError,
    RuntimeError,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Ok => 0,
            RunStatus::SyntaxError => EXIT_SYNTAX,
            RunStatus::RuntimeError => EXIT_RUNTIME,
        }
    }

    pub fn is_ok(self) -> bool {
        self == RunStatus::Ok
    }
}

/// Failures of the driver itself, as opposed to the program it runs.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Map an error from reading `path` to the matching variant.
    pub fn read(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read { path, source },
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) => EXIT_USAGE,
            _ => EXIT_IO,
        }
    }
}
