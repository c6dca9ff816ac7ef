use thiserror::Error;

/// Rejection of a single raw input field, carrying the message shown to the
/// user before asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty. Please enter your name.")]
    EmptyName,

    #[error("Invalid number. Please enter a valid number.")]
    InvalidNumber,

    #[error("Invalid role. Please enter: coder / tutor / visitor.")]
    InvalidRole,

    #[error("Please enter a number between 1 and 12.")]
    HoursOutOfRange,

    #[error("Please answer with yes or no.")]
    NotYesNo,

    #[error("Please complete all fields with valid values.")]
    IncompleteForm,
}
