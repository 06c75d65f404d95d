//! Positional message templates for **tattle** diagnostics.
//!
//! Templates use indexed placeholders: `"cannot open {0}: {1}"`. A single
//! quote starts literal text (`'{0}'` renders as `{0}`) and `''` is a quote
//! character.
//!
//! This crate has no dependencies so the reporter built on it stays usable
//! when the rest of a logging stack is not.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `TemplateError` |
//! | [`lexer`] | `Lexer`, `Segment`, `Placeholder` |
//! | [`template`] | `Template` |
//! | [`display`] | `try_display` |
//!
//! # Quick start
//!
//! ```rust
//! use tattle_fmt::format_positional;
//!
//! assert_eq!(format_positional("value={0}", &[&42]), "value=42");
//! assert_eq!(format_positional("{0} of {1}", &[&3]), "3 of {1}");
//! assert_eq!(format_positional("broken {0", &[&3]), "broken {0");
//! ```

pub mod display;
pub mod error;
pub mod lexer;
pub mod template;

use std::fmt::Display;

pub use display::try_display;
pub use error::TemplateError;
pub use template::Template;

/// Format `template` with `args`, never failing.
///
/// A template that does not parse is returned unchanged.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    match Template::parse(template) {
        Ok(t) => t.render(args),
        Err(_) => template.to_string(),
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test] fn substitutes() { assert_eq!(format_positional("value={0}", &[&42]), "value=42"); }
    #[test] fn keeps_unparsable() { assert_eq!(format_positional("oops {x}", &[&1]), "oops {x}"); }
    #[test] fn keeps_unclosed() { assert_eq!(format_positional("oops {0", &[&1]), "oops {0"); }
    #[test] fn resolves_quotes() { assert_eq!(format_positional("it''s {0}", &[&"here"]), "it's here"); }
    #[test] fn no_args() { assert_eq!(format_positional("{0}", &[]), "{0}"); }
}
