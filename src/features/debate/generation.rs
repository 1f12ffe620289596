//! # Generation Capability
//!
//! The pluggable "prompt in, text out" collaborator behind every debate turn. The
//! engine awaits exactly one call at a time and never retries.

use async_trait::async_trait;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use std::future::Future;

/// Token counts reported by a completion, when the backend provides them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn text(text: impl Into<String>) -> Self {
        Completion {
            text: text.into(),
            usage: None,
        }
    }
}

#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Model identifier used to price reported usage
    fn model(&self) -> &str {
        "unknown"
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<Completion>;
}

/// Adapts an async closure into a [`GenerationCapability`]
pub struct FnCapability<F> {
    f: F,
}

pub fn from_fn<F, Fut>(f: F) -> FnCapability<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Completion>> + Send,
{
    FnCapability { f }
}

#[async_trait]
impl<F, Fut> GenerationCapability for FnCapability<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Completion>> + Send,
{
    async fn generate(&self, prompt: &str) -> anyhow::Result<Completion> {
        (self.f)(prompt.to_string()).await
    }
}

/// Chat-completion backed generation using the `openai` crate.
///
/// Credentials are read by the crate from `OPENAI_KEY` / `OPENAI_BASE_URL`.
pub struct OpenAiGenerator {
    model: String,
}

impl OpenAiGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        OpenAiGenerator {
            model: model.into(),
        }
    }
}

#[async_trait]
impl GenerationCapability for OpenAiGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<Completion> {
        let messages = vec![ChatCompletionMessage {
            role: ChatCompletionMessageRole::User,
            content: Some(prompt.to_string()),
            name: None,
            function_call: None,
            tool_call_id: None,
            tool_calls: None,
        }];

        let chat_completion = ChatCompletion::builder(&self.model, messages)
            .create()
            .await
            .map_err(|e| anyhow::anyhow!("OpenAI API error: {}", e))?;

        let usage = chat_completion.usage.as_ref().map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        });

        let text = chat_completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("No response from OpenAI"))?;

        Ok(Completion { text, usage })
    }
}
