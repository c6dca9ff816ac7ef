use std::fmt;

/// Terminal outcome of evaluating a [`UserRecord`](super::UserRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Decision {
    Allow,
    Review,
    Deny,
}

impl Decision {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Review => "review",
            Decision::Deny => "deny",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a decision was reached. One variant per guard in the decision chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    #[cfg_attr(feature = "serde", serde(rename = "User is not an adult"))]
    NotAdult,
    #[cfg_attr(feature = "serde", serde(rename = "Rules were not accepted"))]
    RulesNotAccepted,
    #[cfg_attr(feature = "serde", serde(rename = "Invalid role"))]
    InvalidRole,
    #[cfg_attr(feature = "serde", serde(rename = "High risk score"))]
    HighRisk,
    #[cfg_attr(feature = "serde", serde(rename = "All checks passed"))]
    AllChecksPassed,
}

impl Reason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::NotAdult => "User is not an adult",
            Reason::RulesNotAccepted => "Rules were not accepted",
            Reason::InvalidRole => "Invalid role",
            Reason::HighRisk => "High risk score",
            Reason::AllChecksPassed => "All checks passed",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct DecisionResult {
    decision: Decision,
    reason: Reason,
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.decision, self.reason)
    }
}

impl DecisionResult {
    pub fn new(decision: Decision, reason: Reason) -> Self {
        Self { decision, reason }
    }

    #[must_use]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    #[must_use]
    pub fn reason(&self) -> Reason {
        self.reason
    }
}
