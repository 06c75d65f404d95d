use std::fmt::Display;

use crate::display::try_display;
use crate::error::TemplateError;
use crate::lexer::{Lexer, Segment};

/// A parsed positional template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let segments = Lexer::new(src).tokenize()?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// One past the highest argument index referenced, or 0 without placeholders.
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(p) => Some(p.index.saturating_add(1)),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute `args` into the template.
    ///
    /// A placeholder whose argument is missing, or whose argument fails to
    /// format, is rendered as `{index}`.
    pub fn render(&self, args: &[&dyn Display]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => {
                    match args.get(p.index).and_then(|arg| try_display(*arg)) {
                        Some(rendered) => out.push_str(&rendered),
                        None => out.push_str(&format!("{{{}}}", p.index)),
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    struct Broken;
    impl fmt::Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result { Err(fmt::Error) }
    }

    fn render(src: &str, args: &[&dyn Display]) -> String {
        Template::parse(src).unwrap().render(args)
    }

    #[test] fn no_placeholders() { assert_eq!(render("plain", &[]), "plain"); }
    #[test] fn one_arg() { assert_eq!(render("value={0}", &[&42]), "value=42"); }
    #[test] fn reordered() { assert_eq!(render("{1}-{0}", &[&"a", &"b"]), "b-a"); }
    #[test] fn repeated() { assert_eq!(render("{0}{0}", &[&7]), "77"); }
    #[test] fn missing_arg() { assert_eq!(render("{0} and {1}", &[&"x"]), "x and {1}"); }
    #[test] fn extra_args_ignored() { assert_eq!(render("{0}", &[&1, &2]), "1"); }
    #[test] fn failing_display() { assert_eq!(render("[{0}]", &[&Broken]), "[{0}]"); }
    #[test] fn typed_placeholder() { assert_eq!(render("{0,number,#}", &[&3.5]), "3.5"); }
    #[test] fn arity_counts_highest() { assert_eq!(Template::parse("{3} {0}").unwrap().arity(), 4); }
    #[test] fn arity_zero() { assert_eq!(Template::parse("'{9}'").unwrap().arity(), 0); }
}
