mod contribution;
mod decision;
mod error;
mod evaluation_report;
mod user;

pub use contribution::ScoreContribution;
pub use decision::{Decision, DecisionResult, Reason};
pub use error::ValidationError;
pub use evaluation_report::EvaluationReport;
pub use user::{ADULT_AGE, KNOWN_ROLES, UserRecord};
