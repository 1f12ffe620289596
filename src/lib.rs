// Core layer - configuration and error types
pub mod core;

// Features layer - participants, debate engine, cost tracking
pub mod features;

pub use crate::core::{Config, DebateError, RunConfig};

pub use features::{
    // Analytics
    CostLedger,
    // Debate
    Aborted, Agent, GenerationCapability, Message, MessageRouter, OpenAiGenerator,
    PromptTemplate, ResponseAction, RoundScheduler, Transcript,
    // Participants
    Participant, ParticipantRoster,
};
