//! # Debate Errors
//!
//! Every failure a run can surface to its caller. None are recovered internally.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use thiserror::Error;

/// Errors raised while configuring or running a debate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebateError {
    /// Malformed or missing participant, topic or template configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The generation capability errored or returned unusable content.
    #[error("Generation failed for {speaker}: {reason}")]
    GenerationFailure { speaker: String, reason: String },

    /// A message broke the two-party addressing invariants.
    #[error("Routing violation: {0}")]
    RoutingViolation(String),

    /// Accumulated generation cost reached the invested budget.
    #[error("Budget exhausted: spent ${spent:.4} of ${budget:.4}")]
    BudgetExhausted { spent: f64, budget: f64 },
}

impl DebateError {
    pub fn config(msg: impl Into<String>) -> Self {
        DebateError::Configuration(msg.into())
    }

    pub fn routing(msg: impl Into<String>) -> Self {
        DebateError::RoutingViolation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DebateError>;
