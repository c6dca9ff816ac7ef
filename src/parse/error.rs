use thiserror::Error;

/// Errors produced when parsing batch input. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error on line {line}: {message}")]
pub struct ParseError {
    line: usize,
    message: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
