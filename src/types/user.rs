/// Roles a user may check in with. Anything else is denied as an invalid role.
pub const KNOWN_ROLES: [&str; 3] = ["coder", "tutor", "visitor"];

/// Age at which a user counts as an adult.
pub const ADULT_AGE: i64 = 18;

/// Declared attributes of a user checking in.
///
/// The core accepts any values here; range checks, trimming and role
/// normalisation happen in [`validate`](crate::validate) before a record is
/// built from raw input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRecord {
    pub full_name: String,
    pub age: i64,
    pub role: String,
    pub accepted_rules: bool,
    pub available_hours: f64,
}

impl UserRecord {
    pub fn new(
        full_name: impl Into<String>,
        age: i64,
        role: impl Into<String>,
        accepted_rules: bool,
        available_hours: f64,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            role: role.into(),
            accepted_rules,
            available_hours,
        }
    }

    #[must_use]
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Whether `role` is one of [`KNOWN_ROLES`]. Comparison is exact.
    #[must_use]
    pub fn has_known_role(&self) -> bool {
        KNOWN_ROLES.contains(&self.role.as_str())
    }
}
