//! Risk scoring and access decisions for training lab check-ins.
//!
//! ```
//! use labgate::{Decision, Reason, UserRecord, decide, score};
//!
//! let user = UserRecord::new("Ada", 19, "visitor", true, 1.0);
//! let risk = score(&user);
//! assert_eq!(risk, 3);
//!
//! let result = decide(&user, risk);
//! assert_eq!(result.decision(), Decision::Review);
//! assert_eq!(result.reason(), Reason::HighRisk);
//! ```

pub mod config;
mod error;
mod evaluate;
pub mod parse;
pub mod present;
pub mod prompt;
mod score;
#[cfg(feature = "cli")]
pub mod telemetry;
mod types;
pub mod validate;

pub use error::CheckinError;
pub use evaluate::{decide, evaluate, evaluate_detailed};
pub use score::{score, score_breakdown};
pub use types::{
    ADULT_AGE, Decision, DecisionResult, EvaluationReport, KNOWN_ROLES, Reason, ScoreContribution,
    UserRecord, ValidationError,
};
