//! # Feature: Participant Roster
//!
//! Each debater has a name, a profile (role label) and the name of the opponent it
//! addresses. The roster file holds exactly two entries, `debator1` speaking first:
//!
//! ```json
//! {
//!   "debator1": { "name": "Alex", "profile": "Optimist", "opponent_name": "Sam" },
//!   "debator2": { "name": "Sam", "profile": "Skeptic", "opponent_name": "Alex" }
//! }
//! ```
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{DebateError, Result};

/// Identity of one debater. Immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Role label shown alongside the name
    #[serde(default)]
    pub profile: String,
    pub opponent_name: String,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        profile: impl Into<String>,
        opponent_name: impl Into<String>,
    ) -> Self {
        Participant {
            name: name.into(),
            profile: profile.into(),
            opponent_name: opponent_name.into(),
        }
    }
}

/// The two debaters, in speaking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRoster {
    pub debator1: Participant,
    pub debator2: Participant,
}

impl ParticipantRoster {
    /// Load and validate a roster from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DebateError::config(format!(
                "Failed to read participants file {}: {e}",
                path.display()
            ))
        })?;
        let roster = Self::from_json(&contents)?;
        debug!(
            "Loaded participants from {}: {} vs {}",
            path.display(),
            roster.debator1.name,
            roster.debator2.name
        );
        Ok(roster)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let roster: ParticipantRoster = serde_json::from_str(json)
            .map_err(|e| DebateError::config(format!("Invalid participants JSON: {e}")))?;
        roster.validate()?;
        Ok(roster)
    }

    /// Names must be present and distinct, and each debater must name the other as opponent
    pub fn validate(&self) -> Result<()> {
        validate_pair(&self.debator1, &self.debator2)
    }
}

/// Check that two participants form a well-addressed pair
pub fn validate_pair(first: &Participant, second: &Participant) -> Result<()> {
    for p in [first, second] {
        if p.name.trim().is_empty() {
            return Err(DebateError::config("Participant name must not be empty"));
        }
        if p.opponent_name.trim().is_empty() {
            return Err(DebateError::config(format!(
                "Participant '{}' has no opponent_name",
                p.name
            )));
        }
    }

    if first.name == second.name {
        return Err(DebateError::config(format!(
            "Both participants are named '{}'",
            first.name
        )));
    }

    if first.opponent_name != second.name || second.opponent_name != first.name {
        return Err(DebateError::config(format!(
            "Participants must name each other as opponents: {} -> {}, {} -> {}",
            first.name, first.opponent_name, second.name, second.opponent_name
        )));
    }

    Ok(())
}
