//! # Debate Feature
//!
//! Turn-taking debates between two participants on a shared topic.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! A [`RoundScheduler`] seeds the first [`Agent`] with the topic and then alternates
//! activations. Each activation routes the opponent's last message through the
//! [`MessageRouter`], renders the agent's memory as context, fills the
//! [`PromptTemplate`] and awaits the [`GenerationCapability`].

pub mod action;
pub mod agent;
pub mod context;
pub mod generation;
pub mod message;
pub mod router;
pub mod scheduler;
pub mod template;

pub use action::ResponseAction;
pub use agent::{Agent, Turn};
pub use context::render_context;
pub use generation::{from_fn, Completion, GenerationCapability, OpenAiGenerator, TokenUsage};
pub use message::{Cause, Message, SEED_SENDER};
pub use router::MessageRouter;
pub use scheduler::{Aborted, RoundScheduler, Transcript, TurnRecord};
pub use template::PromptTemplate;
