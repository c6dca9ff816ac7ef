
use labgate::{
    ADULT_AGE, Decision, Reason, UserRecord, decide, evaluate, evaluate_detailed, score,
    score_breakdown,
};
use proptest::prelude::*;
use strategies::{KNOWN, arb_eligible_user, arb_unknown_role, arb_user};

// ---------------------------------------------------------------------------
// Invariant 1: Deny guards win in order
//
// Minors are always denied as minors; adults who declined the rules are
// denied for that; adults with an unknown role are denied for the role.
// None of these look at the score.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn minors_always_denied(user in arb_user(), age in i64::MIN..ADULT_AGE, risk in any::<u32>()) {
        let user = UserRecord { age, ..user };
        let result = decide(&user, risk);
        prop_assert_eq!(result.decision(), Decision::Deny);
        prop_assert_eq!(result.reason(), Reason::NotAdult);
    }

    #[test]
    fn declined_rules_denied(user in arb_user(), age in ADULT_AGE..=i64::MAX, risk in any::<u32>()) {
        let user = UserRecord { age, accepted_rules: false, ..user };
        let result = decide(&user, risk);
        prop_assert_eq!(result.decision(), Decision::Deny);
        prop_assert_eq!(result.reason(), Reason::RulesNotAccepted);
    }

    #[test]
    fn unknown_roles_denied(
        user in arb_user(),
        age in ADULT_AGE..=i64::MAX,
        role in arb_unknown_role(),
        risk in any::<u32>()
    ) {
        let user = UserRecord { age, role, accepted_rules: true, ..user };
        prop_assert!(!KNOWN.contains(&user.role.as_str()));
        let result = decide(&user, risk);
        prop_assert_eq!(result.decision(), Decision::Deny);
        prop_assert_eq!(result.reason(), Reason::InvalidRole);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Score bounds
//
// The score never goes below zero and never exceeds the number of additive
// rules. The breakdown, summed and floored, reproduces it.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn score_within_bounds(user in arb_user()) {
        let risk = score(&user);
        prop_assert!(risk <= 3, "score {} above additive rule count", risk);
    }

    #[test]
    fn breakdown_reproduces_score(user in arb_user()) {
        let total: i32 = score_breakdown(&user).iter().map(|c| c.weight).sum();
        prop_assert_eq!(u32::try_from(total.max(0)).unwrap(), score(&user));
    }

    #[test]
    fn settled_coder_floors_at_zero(age in 21_i64..=200, hours in 4.0_f64..1e6) {
        let user = UserRecord::new("Coder", age, "coder", true, hours);
        prop_assert_eq!(score(&user), 0);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Eligible users split on the score alone
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn eligible_users_review_iff_high_score(user in arb_eligible_user()) {
        let risk = score(&user);
        let result = decide(&user, risk);
        if risk >= 2 {
            prop_assert_eq!(result.decision(), Decision::Review);
            prop_assert_eq!(result.reason(), Reason::HighRisk);
        } else {
            prop_assert_eq!(result.decision(), Decision::Allow);
            prop_assert_eq!(result.reason(), Reason::AllChecksPassed);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: No hidden state
//
// Repeated calls give identical output, and the detailed path agrees with
// the plain one.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn repeated_calls_identical(user in arb_user()) {
        let first_score = score(&user);
        let first = decide(&user, first_score);
        for _ in 0..5 {
            prop_assert_eq!(score(&user), first_score);
            prop_assert_eq!(decide(&user, first_score), first);
        }
    }

    #[test]
    fn detailed_matches_plain(user in arb_user()) {
        let report = evaluate_detailed(&user);
        prop_assert_eq!(report.result(), evaluate(&user));
        prop_assert_eq!(report.score(), score(&user));
        prop_assert!(!report.guards_checked().is_empty());
    }
}
