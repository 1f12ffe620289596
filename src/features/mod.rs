//! # Features Layer
//!
//! - `participants`: debater identities and roster loading
//! - `debate`: routing, agents and the round scheduler
//! - `analytics`: generation cost and budget tracking

pub mod analytics;
pub mod debate;
pub mod participants;

pub use analytics::CostLedger;
pub use debate::{
    Aborted, Agent, GenerationCapability, Message, MessageRouter, OpenAiGenerator,
    PromptTemplate, ResponseAction, RoundScheduler, Transcript,
};
pub use participants::{Participant, ParticipantRoster};
