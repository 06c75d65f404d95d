use std::fmt::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// Render `value` with `Display`, returning `None` instead of failing.
///
/// Covers both a `fmt::Error` from the implementation and a panic inside it.
/// The panic hook still runs, so a panicking value is visible on stderr.
pub fn try_display<T: fmt::Display + ?Sized>(value: &T) -> Option<String> {
    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        write!(out, "{}", value).ok().map(|()| out)
    }))
    .ok()
    .flatten()
}
