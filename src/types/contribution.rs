use std::fmt;

/// A risk rule that fired for a user, with the amount it added to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreContribution {
    pub rule: &'static str,
    pub weight: i32,
}

impl fmt::Display for ScoreContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.rule, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_signs_weight() {
        let up = ScoreContribution { rule: "visitor_role", weight: 1 };
        let down = ScoreContribution { rule: "committed_coder", weight: -1 };
        assert_eq!(up.to_string(), "visitor_role +1");
        assert_eq!(down.to_string(), "committed_coder -1");
    }
}
