//! Shared helpers for driver tests.

use std::io::Write;
use std::sync::Arc;

use lox_diagnostic::BufferReporter;
use tempfile::NamedTempFile;

pub fn buffer() -> Arc<BufferReporter> {
    Arc::new(BufferReporter::new())
}

/// A temporary `.lox` file holding `source`.
pub fn source_file(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lox")
        .tempfile()
        .expect("create temp file");
    file.write_all(source.as_bytes()).expect("write temp file");
    file
}

pub fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("temp path is UTF-8")
}
