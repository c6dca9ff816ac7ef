use std::fmt;
use std::time::Duration;

use super::contribution::ScoreContribution;
use super::decision::DecisionResult;

/// Detailed evaluation report returned by
/// [`evaluate_detailed()`](crate::evaluate_detailed).
///
/// Contains the decision, the risk score and the rules that built it up, the
/// guards checked before one matched, and the wall-clock duration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use]
pub struct EvaluationReport {
    result: DecisionResult,
    score: u32,
    contributions: Vec<ScoreContribution>,
    guards_checked: Vec<&'static str>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        result: DecisionResult,
        score: u32,
        contributions: Vec<ScoreContribution>,
        guards_checked: Vec<&'static str>,
        duration: Duration,
    ) -> Self {
        Self {
            result,
            score,
            contributions,
            guards_checked,
            duration,
        }
    }

    /// The decision, same as [`evaluate()`](crate::evaluate).
    pub fn result(&self) -> DecisionResult {
        self.result
    }

    /// The floored risk score the decision was made with.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Risk rules that fired, in rule order.
    #[must_use]
    pub fn contributions(&self) -> &[ScoreContribution] {
        &self.contributions
    }

    /// Guard names in the order they were checked. The last one matched.
    #[must_use]
    pub fn guards_checked(&self) -> &[&'static str] {
        &self.guards_checked
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision: {}", self.result)?;
        write!(f, ", score: {}", self.score)?;
        let fired: Vec<String> = self.contributions.iter().map(ToString::to_string).collect();
        write!(f, ", fired: [{}]", fired.join(", "))?;
        write!(f, ", guards: [{}]", self.guards_checked.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
