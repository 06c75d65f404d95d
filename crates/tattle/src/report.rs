use std::borrow::Cow;
use std::fmt::Display;

use tattle_fmt::format_positional;

use crate::cause::Cause;

/// The text part of a report.
#[derive(Clone)]
pub enum Message<'a> {
    /// Used verbatim; no placeholder or quote processing.
    Text(Cow<'a, str>),
    /// A positional template and its arguments.
    Template { template: &'a str, args: &'a [&'a dyn Display] },
}

impl Message<'_> {
    fn render(&self) -> String {
        match self {
            Message::Text(text) => text.to_string(),
            Message::Template { template, args } => format_positional(template, args),
        }
    }
}

#[derive(Clone)]
enum Parts<'a> {
    Message(Message<'a>),
    Cause(&'a Cause),
    Both(&'a Cause, Message<'a>),
}

/// One request to the reporter: a message, a cause, or both.
///
/// ```rust
/// use tattle::{Cause, Report};
///
/// let cause = Cause::new("FooError", "bad thing");
/// let args: [&dyn std::fmt::Display; 1] = [&3];
/// let report = Report::template("writer {0} failed", &args).with_cause(&cause);
/// assert_eq!(report.render(), "writer 3 failed (FooError: bad thing)");
/// ```
#[derive(Clone)]
pub struct Report<'a> {
    parts: Parts<'a>,
}

impl<'a> Report<'a> {
    pub fn new(message: Message<'a>) -> Self {
        Self { parts: Parts::Message(message) }
    }

    pub fn text(message: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Message::Text(message.into()))
    }

    pub fn template(template: &'a str, args: &'a [&'a dyn Display]) -> Self {
        Self::new(Message::Template { template, args })
    }

    pub fn cause(cause: &'a Cause) -> Self {
        Self { parts: Parts::Cause(cause) }
    }

    /// Attach `cause`, replacing any cause already attached.
    pub fn with_cause(self, cause: &'a Cause) -> Self {
        let parts = match self.parts {
            Parts::Message(m) | Parts::Both(_, m) => Parts::Both(cause, m),
            Parts::Cause(_) => Parts::Cause(cause),
        };
        Self { parts }
    }

    /// The report body, without the reporter prefix.
    pub fn render(&self) -> String {
        match &self.parts {
            Parts::Message(m) => m.render(),
            Parts::Cause(c) => c.to_string(),
            Parts::Both(c, m) => {
                let m = m.render();
                if c.message().is_empty() {
                    format!("{} ({})", m, c.type_name())
                } else {
                    format!("{} ({}: {})", m, c.type_name(), c.message())
                }
            }
        }
    }
}
