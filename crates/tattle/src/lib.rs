//! **tattle**: the last-resort reporter for a logging library's own failures.
//!
//! When the logging pipeline itself breaks (a malformed format string, an
//! I/O error while writing an entry, a writer that was never initialized)
//! there is no logger left to tell. `tattle` writes one line per report to
//! standard error, prefixed with `LOGGING ERROR: `, and never fails or
//! panics back into the caller.
//!
//! ```rust
//! use tattle::{CaptureSink, Cause, InternalReporter};
//!
//! // Process-wide, straight to stderr:
//! tattle::error_fmt("cannot open {0}", &[&"app.log"]);
//!
//! // Injected, e.g. in tests:
//! let reporter = InternalReporter::new(CaptureSink::new());
//! reporter.error_with(&Cause::new("FooError", "bad thing"), "outer");
//! assert_eq!(reporter.sink().lines(), vec!["LOGGING ERROR: outer (FooError: bad thing)"]);
//! ```

mod cause;
mod macros;
mod report;
mod reporter;
pub mod sink;

pub use cause::Cause;
pub use report::{Message, Report};
pub use reporter::{
    error, error_cause, error_fmt, error_with, error_with_fmt, report, stderr, InternalReporter,
    PREFIX,
};
pub use sink::{CaptureSink, DiagnosticSink, LogSink, StderrSink, WriterSink};
pub use tattle_fmt::{format_positional, Template, TemplateError};
