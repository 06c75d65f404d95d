use std::fmt::Display;

use crate::cause::Cause;
use crate::report::Report;
use crate::sink::{DiagnosticSink, StderrSink};

/// Fixed prefix of every reported line.
pub const PREFIX: &str = "LOGGING ERROR: ";

/// Formats reports and hands each one to its sink as a single line.
///
/// Stateless apart from the sink; every call is independent and nothing
/// it does can fail or panic back into the caller.
#[derive(Debug, Default, Clone)]
pub struct InternalReporter<S> {
    sink: S,
}

impl<S> InternalReporter<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: DiagnosticSink> InternalReporter<S> {
    /// Single entry point; the `error*` methods all funnel through here.
    pub fn report(&self, report: Report<'_>) {
        let body = report.render();
        let mut line = String::with_capacity(PREFIX.len() + body.len());
        line.push_str(PREFIX);
        line.push_str(&body);
        self.sink.emit(&line);
    }

    /// Report `message` verbatim.
    pub fn error(&self, message: &str) {
        self.report(Report::text(message));
    }

    /// Report a positional template filled with `args`.
    pub fn error_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.report(Report::template(template, args));
    }

    /// Report a cause on its own: `message (Type)`, or `Type` when it has no message.
    pub fn error_cause(&self, cause: &Cause) {
        self.report(Report::cause(cause));
    }

    /// Report `message` followed by the cause in parentheses.
    pub fn error_with(&self, cause: &Cause, message: &str) {
        self.report(Report::text(message).with_cause(cause));
    }

    pub fn error_with_fmt(&self, cause: &Cause, template: &str, args: &[&dyn Display]) {
        self.report(Report::template(template, args).with_cause(cause));
    }
}

// ── Process-wide reporter ─────────────────────────────────────────────────

static STDERR: InternalReporter<StderrSink> = InternalReporter::new(StderrSink);

/// The reporter behind the free functions of this crate.
pub fn stderr() -> &'static InternalReporter<StderrSink> {
    &STDERR
}

pub fn report(report: Report<'_>) {
    STDERR.report(report);
}

pub fn error(message: &str) {
    STDERR.error(message);
}

pub fn error_fmt(template: &str, args: &[&dyn Display]) {
    STDERR.error_fmt(template, args);
}

pub fn error_cause(cause: &Cause) {
    STDERR.error_cause(cause);
}

pub fn error_with(cause: &Cause, message: &str) {
    STDERR.error_with(cause, message);
}

pub fn error_with_fmt(cause: &Cause, template: &str, args: &[&dyn Display]) {
    STDERR.error_with_fmt(cause, template, args);
}
