use std::time::Instant;

use tracing::debug;

use crate::score::{score, score_breakdown, score_of};
use crate::{Decision, DecisionResult, EvaluationReport, Reason, UserRecord};

/// One link of the decision chain. Guards are checked in array order and the
/// first one whose `matches` holds decides.
struct Guard {
    name: &'static str,
    matches: fn(&UserRecord, u32) -> bool,
    decision: Decision,
    reason: Reason,
}

// Order is significant: deny checks must run before the risk review.
static GUARDS: [Guard; 5] = [
    Guard {
        name: "underage",
        matches: |u, _| !u.is_adult(),
        decision: Decision::Deny,
        reason: Reason::NotAdult,
    },
    Guard {
        name: "rules_declined",
        matches: |u, _| !u.accepted_rules,
        decision: Decision::Deny,
        reason: Reason::RulesNotAccepted,
    },
    Guard {
        name: "invalid_role",
        matches: |u, _| !u.has_known_role(),
        decision: Decision::Deny,
        reason: Reason::InvalidRole,
    },
    Guard {
        name: "high_risk",
        matches: |_, score| score >= 2,
        decision: Decision::Review,
        reason: Reason::HighRisk,
    },
    Guard {
        name: "all_clear",
        matches: |_, _| true,
        decision: Decision::Allow,
        reason: Reason::AllChecksPassed,
    },
];

/// Walk the guard chain, returning the index of the matching guard.
fn matching_guard(user: &UserRecord, score: u32) -> usize {
    GUARDS
        .iter()
        .position(|guard| (guard.matches)(user, score))
        .unwrap_or(GUARDS.len() - 1)
}

/// Map a user and their risk score to a decision.
///
/// `score` is only consulted once the user has passed the deny checks, so an
/// underage user is denied whatever score is passed in.
pub fn decide(user: &UserRecord, score: u32) -> DecisionResult {
    let guard = &GUARDS[matching_guard(user, score)];
    DecisionResult::new(guard.decision, guard.reason)
}

/// Score the user, then decide.
pub fn evaluate(user: &UserRecord) -> DecisionResult {
    let risk = score(user);
    let result = decide(user, risk);
    debug!(
        role = %user.role,
        score = risk,
        decision = %result.decision(),
        reason = %result.reason(),
        "evaluated check-in"
    );
    result
}

/// Evaluate with diagnostics: score breakdown, guards checked and timing.
pub fn evaluate_detailed(user: &UserRecord) -> EvaluationReport {
    let start = Instant::now();

    let contributions = score_breakdown(user);
    let risk = score_of(&contributions);
    let idx = matching_guard(user, risk);
    let guard = &GUARDS[idx];
    let guards_checked = GUARDS[..=idx].iter().map(|g| g.name).collect();
    let result = DecisionResult::new(guard.decision, guard.reason);

    let duration = start.elapsed();
    debug!(
        score = risk,
        guard = guard.name,
        decision = %result.decision(),
        ?duration,
        "evaluated check-in with report"
    );

    EvaluationReport::new(result, risk, contributions, guards_checked, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(age: i64, role: &str, accepted: bool, hours: f64) -> UserRecord {
        UserRecord::new("Test User", age, role, accepted, hours)
    }

    #[test]
    fn underage_denied_regardless_of_score() {
        let u = user(17, "coder", true, 5.0);
        for s in [0, 1, 2, 3, u32::MAX] {
            assert_eq!(
                decide(&u, s),
                DecisionResult::new(Decision::Deny, Reason::NotAdult)
            );
        }
    }

    #[test]
    fn underage_beats_declined_rules_and_bad_role() {
        let u = user(12, "manager", false, 0.0);
        assert_eq!(decide(&u, 3).reason(), Reason::NotAdult);
    }

    #[test]
    fn declined_rules_beat_bad_role() {
        let u = user(30, "manager", false, 6.0);
        assert_eq!(decide(&u, 0).reason(), Reason::RulesNotAccepted);
    }

    #[test]
    fn bad_role_beats_high_risk() {
        let u = user(19, "", true, 1.0);
        assert_eq!(
            decide(&u, 3),
            DecisionResult::new(Decision::Deny, Reason::InvalidRole)
        );
    }

    #[test]
    fn score_threshold_for_review() {
        let u = user(30, "tutor", true, 6.0);
        assert_eq!(decide(&u, 1).decision(), Decision::Allow);
        assert_eq!(decide(&u, 2).decision(), Decision::Review);
        assert_eq!(decide(&u, 3).decision(), Decision::Review);
    }

    #[test]
    fn adult_boundary() {
        assert_eq!(decide(&user(18, "tutor", true, 6.0), 0).decision(), Decision::Allow);
        assert_eq!(decide(&user(17, "tutor", true, 6.0), 0).decision(), Decision::Deny);
    }

    #[test]
    fn evaluate_matches_decide_on_score() {
        let u = user(19, "visitor", true, 1.0);
        assert_eq!(evaluate(&u), decide(&u, score(&u)));
        assert_eq!(
            evaluate(&u),
            DecisionResult::new(Decision::Review, Reason::HighRisk)
        );
    }

    #[test]
    fn detailed_report_stops_at_matching_guard() {
        let report = evaluate_detailed(&user(30, "tutor", false, 6.0));
        assert_eq!(report.guards_checked(), &["underage", "rules_declined"]);
        assert_eq!(report.result().reason(), Reason::RulesNotAccepted);
    }

    #[test]
    fn detailed_report_walks_full_chain_on_allow() {
        let report = evaluate_detailed(&user(25, "coder", true, 5.0));
        assert_eq!(report.guards_checked().len(), GUARDS.len());
        assert_eq!(report.score(), 0);
        assert_eq!(report.contributions().len(), 1);
        assert_eq!(report.result().decision(), Decision::Allow);
    }

    #[test]
    fn detailed_score_is_its_breakdown_total() {
        for u in [
            user(19, "visitor", true, 1.0),
            user(20, "coder", true, 8.0),
            user(18, "tutor", true, 1.0),
            user(15, "manager", true, 0.5),
        ] {
            let report = evaluate_detailed(&u);
            let total: i32 = report.contributions().iter().map(|c| c.weight).sum();
            assert_eq!(report.score(), u32::try_from(total.max(0)).unwrap());
            assert_eq!(report.score(), score(&u));
        }
    }
}
