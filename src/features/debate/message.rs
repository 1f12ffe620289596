//! # Debate Messages
//!
//! Immutable records exchanged between the debaters. A message is created once,
//! either as the seed or as one activation's response, and only ever cloned after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::participants::Participant;

/// Sender label of the externally injected seed message
pub const SEED_SENDER: &str = "User";

/// What produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// The topic injected before the first round
    UserSeed,
    /// A debater's generated statement
    AgentResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    content: String,
    sender: String,
    role: String,
    recipient: String,
    cause: Cause,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// The seed carrying the topic, addressed to the first speaker only
    pub fn seed(topic: impl Into<String>, first_speaker: &str) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: topic.into(),
            sender: SEED_SENDER.to_string(),
            role: SEED_SENDER.to_string(),
            recipient: first_speaker.to_string(),
            cause: Cause::UserSeed,
            timestamp: Utc::now(),
        }
    }

    /// A response from `speaker`, addressed to its opponent
    pub fn response(speaker: &Participant, content: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: speaker.name.clone(),
            role: speaker.profile.clone(),
            recipient: speaker.opponent_name.clone(),
            cause: Cause::AgentResponse,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Profile of the sender at the time it spoke
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn cause(&self) -> Cause {
        self.cause
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_seed(&self) -> bool {
        self.cause == Cause::UserSeed
    }

    pub fn is_addressed_to(&self, name: &str) -> bool {
        self.recipient == name
    }
}
