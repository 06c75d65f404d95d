use std::fmt;

/// A template that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateError {
    pub message: String,
    /// 1-based character column where the error was detected.
    pub col: usize,
}

impl TemplateError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template error at column {}: {}", self.col, self.message)
    }
}

impl std::error::Error for TemplateError {}
