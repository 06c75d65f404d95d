//! Destinations for reporter lines.
//!
//! Every sink receives a complete line, prefix included and terminator
//! excluded, and must write it as one unit so concurrent reports never
//! interleave mid-line. Write failures are swallowed.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Where the reporter writes its lines.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

fn terminated(line: &str) -> String {
    let mut buf = String::with_capacity(line.len() + LINE_SEPARATOR.len());
    buf.push_str(line);
    buf.push_str(LINE_SEPARATOR);
    buf
}

// ── Stderr ────────────────────────────────────────────────────────────────

/// The process standard error stream. Default sink of the reporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, line: &str) {
        let buf = terminated(line);
        let mut handle = io::stderr().lock();
        // Nowhere left to report a failure of the diagnostic channel itself.
        let _ = handle.write_all(buf.as_bytes());
        let _ = handle.flush();
    }
}

// ── Writer ────────────────────────────────────────────────────────────────

/// Any `Write` implementation behind a mutex.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> DiagnosticSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        let buf = terminated(line);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(buf.as_bytes());
        let _ = writer.flush();
    }
}

// ── Capture ───────────────────────────────────────────────────────────────

/// Keeps lines in memory so host tests can assert on them.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drain the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for CaptureSink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

// ── Log facade ────────────────────────────────────────────────────────────

/// Forwards lines to the `log` facade at error level.
///
/// Only useful once the host logger is known to work; if no logger is
/// installed the lines are silently discarded by `log` itself.
#[derive(Debug, Clone)]
pub struct LogSink {
    target: Cow<'static, str>,
}

impl LogSink {
    pub const DEFAULT_TARGET: &'static str = "tattle";

    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self { target: target.into() }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET)
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&self, line: &str) {
        log::error!(target: self.target(), "{}", line);
    }
}
