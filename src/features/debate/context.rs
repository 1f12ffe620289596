//! # Context Renderer
//!
//! Folds an agent's full memory into the `{context}` slot of the prompt: one
//! `"<sender>: <content>"` line per message, in arrival order. The whole history is
//! always included, so prompt size grows linearly with the number of rounds.
//!
//! The speaker and opponent identities are not parameters: every message carries its
//! own sender name, so the rendered history is the same whichever agent owns it. The
//! identities reach the prompt through the `{name}` and `{opponent_name}` slots instead.

use super::message::Message;

/// Render a memory as debate history
pub fn render_context(memory: &[Message]) -> String {
    memory
        .iter()
        .map(|msg| format!("{}: {}", msg.sender(), msg.content()))
        .collect::<Vec<_>>()
        .join("\n")
}
