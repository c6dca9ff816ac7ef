//! Raw input checks run before a [`UserRecord`] is built.
//!
//! Each validator takes the text a user typed and either returns the
//! normalised value or a [`ValidationError`] whose message can be shown back
//! to them.

use crate::{KNOWN_ROLES, UserRecord, ValidationError};

const MIN_HOURS: f64 = 1.0;
const MAX_HOURS: f64 = 12.0;

/// Trimmed, non-empty name.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

/// Whole-number age. Range is not checked here; the decision chain handles
/// minors.
pub fn validate_age(input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber)
}

/// One of the known roles, matched case-insensitively and returned lowercase.
pub fn validate_role(input: &str) -> Result<String, ValidationError> {
    let normalized = normalize_role(input);
    if KNOWN_ROLES.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ValidationError::InvalidRole)
    }
}

/// Hours available today, between 1 and 12 inclusive.
pub fn validate_hours(input: &str) -> Result<f64, ValidationError> {
    let hours: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::HoursOutOfRange)?;
    if !(MIN_HOURS..=MAX_HOURS).contains(&hours) {
        return Err(ValidationError::HoursOutOfRange);
    }
    Ok(hours)
}

/// `yes` or `no`, any case.
pub fn validate_accept_rules(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ValidationError::NotYesNo),
    }
}

/// Trim and lowercase a role without checking it against the known set.
#[must_use]
pub fn normalize_role(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Raw values submitted through the check-in form.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub full_name: String,
    pub age: String,
    pub role: String,
    pub accept_rules: bool,
    pub hours: String,
}

/// Validate a form submission as a whole.
///
/// The role is only normalised: an unknown role is passed through so the
/// decision chain can deny it with its own reason. Any other bad field fails
/// the whole form with [`ValidationError::IncompleteForm`].
pub fn validate_form(form: &FormInput) -> Result<UserRecord, ValidationError> {
    let incomplete = |_| ValidationError::IncompleteForm;

    let full_name = validate_name(&form.full_name).map_err(incomplete)?;
    let age = validate_age(&form.age).map_err(incomplete)?;
    let available_hours = validate_hours(&form.hours).map_err(incomplete)?;

    Ok(UserRecord {
        full_name,
        age,
        role: normalize_role(&form.role),
        accepted_rules: form.accept_rules,
        available_hours,
    })
}
