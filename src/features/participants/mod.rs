//! # Participants Feature
//!
//! The two debater identities, loaded from a JSON roster.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod roster;

pub use roster::{Participant, ParticipantRoster};
