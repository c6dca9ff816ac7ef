use thiserror::Error;

use crate::ValidationError;
use crate::parse::ParseError;

/// Unified error type for the collection layers around the core.
///
/// [`score()`](crate::score) and [`decide()`](crate::decide) never fail; these
/// errors come from reading, parsing and validating raw input.
#[derive(Debug, Error)]
pub enum CheckinError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("record on line {line}: {source}")]
    Record {
        line: usize,
        source: ValidationError,
    },

    #[error("input closed before check-in was complete")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_message_includes_line() {
        let err = CheckinError::Record {
            line: 7,
            source: ValidationError::NotYesNo,
        };
        assert_eq!(
            err.to_string(),
            "record on line 7: Please answer with yes or no."
        );
    }

    #[test]
    fn validation_is_transparent() {
        let err = CheckinError::from(ValidationError::EmptyName);
        assert_eq!(
            err.to_string(),
            "Name cannot be empty. Please enter your name."
        );
    }
}
