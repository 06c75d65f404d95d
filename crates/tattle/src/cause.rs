use std::any;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use tattle_fmt::try_display;

/// The failure behind a report: a type identifier plus its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    type_name: Cow<'static, str>,
    message: String,
}

impl Cause {
    pub fn new(type_name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), message: message.into() }
    }

    /// Capture `err` using its Rust type path as the type identifier.
    ///
    /// For `&dyn Error` the identifier is the trait object type, since the
    /// concrete type is erased. An error whose `Display` fails or panics
    /// yields an empty message.
    pub fn of<E: Error + ?Sized>(err: &E) -> Self {
        Self {
            type_name: Cow::Borrowed(any::type_name::<E>()),
            message: try_display(err).unwrap_or_default(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The cause's own message; empty when it carries none.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E: Error> From<&E> for Cause {
    fn from(err: &E) -> Self {
        Cause::of(err)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.type_name)
        } else {
            write!(f, "{} ({})", self.message, self.type_name)
        }
    }
}
