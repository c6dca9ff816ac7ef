use crate::{ScoreContribution, UserRecord};

/// A single risk indicator. Every rule is checked for every user; `weight` is
/// added to the running total when `applies` holds.
struct RiskRule {
    name: &'static str,
    weight: i32,
    applies: fn(&UserRecord) -> bool,
}

static RISK_RULES: [RiskRule; 4] = [
    RiskRule {
        name: "short_availability",
        weight: 1,
        applies: |u| u.available_hours < 2.0,
    },
    RiskRule {
        name: "visitor_role",
        weight: 1,
        applies: |u| u.role == "visitor",
    },
    RiskRule {
        name: "young_adult",
        weight: 1,
        applies: |u| (18..=20).contains(&u.age),
    },
    RiskRule {
        name: "committed_coder",
        weight: -1,
        applies: |u| u.role == "coder" && u.available_hours >= 4.0,
    },
];

/// Compute the risk score for a user.
///
/// Never fails and never goes below zero, whatever the record holds.
#[must_use]
pub fn score(user: &UserRecord) -> u32 {
    let total: i32 = RISK_RULES
        .iter()
        .filter(|rule| (rule.applies)(user))
        .map(|rule| rule.weight)
        .sum();
    floor(total)
}

/// The score a breakdown adds up to.
pub(crate) fn score_of(contributions: &[ScoreContribution]) -> u32 {
    floor(contributions.iter().map(|c| c.weight).sum())
}

fn floor(total: i32) -> u32 {
    total.max(0).unsigned_abs()
}

/// The risk rules that fired for `user`, in rule order.
///
/// Summing the weights and flooring at zero gives [`score()`].
#[must_use]
pub fn score_breakdown(user: &UserRecord) -> Vec<ScoreContribution> {
    RISK_RULES
        .iter()
        .filter(|rule| (rule.applies)(user))
        .map(|rule| ScoreContribution {
            rule: rule.name,
            weight: rule.weight,
        })
        .collect()
}
