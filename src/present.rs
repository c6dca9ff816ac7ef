//! Presentation adapters. Both render the same [`Decision`] with their own
//! wording.

use crate::{Decision, DecisionResult, UserRecord, ValidationError};

/// Styled markup for the web check-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub class: &'static str,
    pub body: String,
}

impl FormView {
    #[must_use]
    pub fn label(decision: Decision) -> &'static str {
        match decision {
            Decision::Allow => "allowed",
            Decision::Review => "review",
            Decision::Deny => "denied",
        }
    }

    #[must_use]
    pub fn class_for(decision: Decision) -> &'static str {
        match decision {
            Decision::Allow => "alert alert-success",
            Decision::Review => "alert alert-warning",
            Decision::Deny => "alert alert-danger",
        }
    }

    #[must_use]
    pub fn decision(result: DecisionResult, score: u32) -> Self {
        Self {
            class: Self::class_for(result.decision()),
            body: format!(
                "<strong>Decision:</strong> {}<br><strong>Risk score:</strong> {score}<br><strong>Reason:</strong> {}",
                Self::label(result.decision()),
                result.reason(),
            ),
        }
    }

    #[must_use]
    pub fn rejected(error: &ValidationError) -> Self {
        Self {
            class: Self::class_for(Decision::Deny),
            body: escape_html(&error.to_string()),
        }
    }

    /// The view as a single `<div>` element.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<div class=\"{}\">{}</div>", self.class, self.body)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Alert-style messages for the step-by-step prompt flow.
pub struct DialogView;

impl DialogView {
    pub const PROCESSING: &'static str = "Processing your check-in...";

    /// Steps logged between collecting input and showing the result.
    pub const STEPS: [&'static str; 3] = [
        "Validating data",
        "Calculating risk score",
        "Generating decision",
    ];

    #[must_use]
    pub fn label(decision: Decision) -> &'static str {
        match decision {
            Decision::Allow => "ALLOW",
            Decision::Review => "REVIEW",
            Decision::Deny => "DENY",
        }
    }

    #[must_use]
    pub fn message(result: DecisionResult, user: &UserRecord) -> String {
        match result.decision() {
            Decision::Deny => format!(
                "ACCESS DENIED\nReason: {}\nRole: {}",
                result.reason(),
                user.role
            ),
            Decision::Review => format!(
                "ACCESS UNDER REVIEW\nReason: {}\nRole: {}",
                result.reason(),
                user.role
            ),
            Decision::Allow => format!(
                "WELCOME TO THE TRAINING LAB\nRole: {}\nEnjoy your session!",
                user.role
            ),
        }
    }
}
