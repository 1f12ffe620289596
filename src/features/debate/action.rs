//! # Response Action
//!
//! One unit of work: fill the prompt template with the debate so far and ask the
//! generation capability for the speaker's next statement.

use log::debug;
use std::sync::Arc;

use super::generation::{Completion, GenerationCapability};
use super::template::PromptTemplate;
use crate::core::{DebateError, Result};

/// Produces a debater's next statement. Cheap to clone; the template is shared.
#[derive(Debug, Clone)]
pub struct ResponseAction {
    template: Arc<PromptTemplate>,
}

impl ResponseAction {
    pub fn new(template: PromptTemplate) -> Self {
        ResponseAction {
            template: Arc::new(template),
        }
    }

    pub fn build_prompt(&self, context: &str, name: &str, opponent_name: &str) -> String {
        self.template.render(context, name, opponent_name)
    }

    /// Generate a response for `name`.
    ///
    /// Capability errors and blank responses both become
    /// [`DebateError::GenerationFailure`].
    pub async fn generate(
        &self,
        capability: &dyn GenerationCapability,
        context: &str,
        name: &str,
        opponent_name: &str,
    ) -> Result<Completion> {
        let prompt = self.build_prompt(context, name, opponent_name);
        debug!("{} prompt is {} chars", name, prompt.len());

        let completion = capability.generate(&prompt).await.map_err(|e| {
            DebateError::GenerationFailure {
                speaker: name.to_string(),
                reason: format!("{e:#}"),
            }
        })?;

        if completion.text.trim().is_empty() {
            return Err(DebateError::GenerationFailure {
                speaker: name.to_string(),
                reason: "empty response".to_string(),
            });
        }

        Ok(completion)
    }
}
