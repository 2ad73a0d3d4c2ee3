//! Reporting interface between the interpreter core and its host.
//!
//! The scanner, parser and evaluator never write to a stream directly. They
//! receive a [`Reporter`] and push program output and diagnostics through it:
//! - [`ConsoleReporter`]: stdout for output, stderr for diagnostics
//! - [`BufferReporter`]: captures everything for tests and embedding

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Diagnostic;

/// Sink for program output and diagnostics.
///
/// Methods take `&self`; implementations use interior mutability so one
/// reporter can be shared by the scanner, parser and interpreter of a
/// session.
pub trait Reporter {
    /// Emit one line of program output (`print` statements).
    fn print(&self, text: &str);

    /// Record a diagnostic.
    fn emit(&self, diagnostic: Diagnostic);

    /// Whether a syntax error was emitted since the last [`reset`](Self::reset).
    fn had_syntax_error(&self) -> bool;

    /// Whether a runtime error was emitted since the last [`reset`](Self::reset).
    fn had_runtime_error(&self) -> bool;

    /// Clear the error flags (used between REPL lines).
    fn reset(&self);

    fn syntax_error(&self, line: u32, location: &str, message: &str) {
        self.emit(Diagnostic::syntax(line, location, message));
    }

    fn runtime_error(&self, line: u32, message: &str) {
        self.emit(Diagnostic::runtime(line, message));
    }
}

/// Reporter shared between a session's stages.
pub type SharedReporter = Arc<dyn Reporter + Send + Sync>;

/// Writes output to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct ConsoleReporter {
    syntax_error: AtomicBool,
    runtime_error: AtomicBool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn print(&self, text: &str) {
        println!("{text}");
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if diagnostic.is_syntax() {
            self.syntax_error.store(true, Ordering::Relaxed);
        } else {
            self.runtime_error.store(true, Ordering::Relaxed);
        }
        eprintln!("{diagnostic}");
    }

    fn had_syntax_error(&self) -> bool {
        self.syntax_error.load(Ordering::Relaxed)
    }

    fn had_runtime_error(&self) -> bool {
        self.runtime_error.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.syntax_error.store(false, Ordering::Relaxed);
        self.runtime_error.store(false, Ordering::Relaxed);
    }
}

#[derive(Default)]
struct Captured {
    output: String,
    diagnostics: Vec<Diagnostic>,
    /// Index into `diagnostics` where the current (post-reset) window starts.
    window_start: usize,
}

/// Captures output and diagnostics in memory.
#[derive(Default)]
pub struct BufferReporter {
    captured: Mutex<Captured>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All program output so far, one `\n`-terminated line per `print`.
    pub fn output(&self) -> String {
        self.captured.lock().output.clone()
    }

    /// Program output split into lines.
    pub fn output_lines(&self) -> Vec<String> {
        self.captured
            .lock()
            .output
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Every diagnostic emitted, including those before a reset.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.captured.lock().diagnostics.clone()
    }

    /// Rendered diagnostics, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.captured
            .lock()
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Drop captured output and diagnostics.
    pub fn clear(&self) {
        *self.captured.lock() = Captured::default();
    }

    fn any_in_window(&self, pred: impl Fn(&Diagnostic) -> bool) -> bool {
        let captured = self.captured.lock();
        captured.diagnostics[captured.window_start..]
            .iter()
            .any(pred)
    }
}

impl Reporter for BufferReporter {
    fn print(&self, text: &str) {
        let mut captured = self.captured.lock();
        captured.output.push_str(text);
        captured.output.push('\n');
    }

    fn emit(&self, diagnostic: Diagnostic) {
        self.captured.lock().diagnostics.push(diagnostic);
    }

    fn had_syntax_error(&self) -> bool {
        self.any_in_window(Diagnostic::is_syntax)
    }

    fn had_runtime_error(&self) -> bool {
        self.any_in_window(Diagnostic::is_runtime)
    }

    fn reset(&self) {
        let mut captured = self.captured.lock();
        captured.window_start = captured.diagnostics.len();
    }
}

/// Create a shared console reporter.
pub fn console_reporter() -> SharedReporter {
    Arc::new(ConsoleReporter::new())
}
