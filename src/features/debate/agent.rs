//! # Debate Agent
//!
//! A debater: fixed identity, an append-only memory of every message it has seen or
//! said, and one [`ResponseAction`] per activation. `activate` takes `&mut self`, so
//! an agent can never be activated twice at once.

use log::{debug, info};

use super::action::ResponseAction;
use super::context::render_context;
use super::generation::{GenerationCapability, TokenUsage};
use super::message::Message;
use super::router::MessageRouter;
use crate::core::{DebateError, Result};
use crate::features::participants::Participant;

/// Outcome of one activation
#[derive(Debug, Clone)]
pub struct Turn {
    pub message: Message,
    /// Context string the response was generated from
    pub context: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone)]
pub struct Agent {
    identity: Participant,
    memory: Vec<Message>,
    action: ResponseAction,
}

impl Agent {
    pub fn new(identity: Participant, action: ResponseAction) -> Self {
        Agent {
            identity,
            memory: Vec::new(),
            action,
        }
    }

    pub fn identity(&self) -> &Participant {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn opponent_name(&self) -> &str {
        &self.identity.opponent_name
    }

    /// Everything this agent has observed or said, in arrival order
    pub fn memory(&self) -> &[Message] {
        &self.memory
    }

    /// Run one turn: take in newly visible messages, then speak to the opponent.
    ///
    /// An activation with nothing new to react to is a routing violation; the agent
    /// never speaks unprompted.
    pub async fn activate(
        &mut self,
        router: &MessageRouter,
        pending: Vec<Message>,
        capability: &dyn GenerationCapability,
    ) -> Result<Turn> {
        let news = router.route(pending, &self.identity)?;
        if news.is_empty() {
            return Err(DebateError::routing(format!(
                "{} was activated with no message addressed to it",
                self.identity.name
            )));
        }
        debug!("{} observed {} new message(s)", self.identity.name, news.len());
        self.memory.extend(news);

        info!(
            "{}({}): Now Speaking...",
            self.identity.name, self.identity.profile
        );
        let context = render_context(&self.memory);
        let completion = self
            .action
            .generate(
                capability,
                &context,
                &self.identity.name,
                &self.identity.opponent_name,
            )
            .await?;

        let message = Message::response(&self.identity, completion.text);
        self.memory.push(message.clone());

        Ok(Turn {
            message,
            context,
            usage: completion.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::debate::generation::{from_fn, Completion};
    use crate::features::debate::template::PromptTemplate;

    fn setup() -> (Agent, Agent, MessageRouter) {
        let a = Participant::new("A", "Optimist", "B");
        let b = Participant::new("B", "Skeptic", "A");
        let router = MessageRouter::new(&a, &b);
        let action = ResponseAction::new(PromptTemplate::parse("{context}").unwrap());
        (Agent::new(a, action.clone()), Agent::new(b, action), router)
    }

    #[tokio::test]
    async fn test_activate_replies_to_opponent() {
        let (mut a, _b, router) = setup();
        let capability = from_fn(|_p: String| async move { anyhow::Ok(Completion::text("X is better.")) });

        let turn = a
            .activate(&router, vec![Message::seed("Is X better than Y?", "A")], &capability)
            .await
            .unwrap();

        assert_eq!(turn.message.sender(), "A");
        assert_eq!(turn.message.recipient(), "B");
        assert_eq!(turn.message.content(), "X is better.");
        assert_eq!(turn.context, "User: Is X better than Y?");
        assert_eq!(a.memory().len(), 2);
        assert_eq!(a.memory()[1], turn.message);
    }

    #[tokio::test]
    async fn test_context_comes_from_full_memory() {
        let (mut a, mut b, router) = setup();
        let capability = from_fn(|prompt: String| async move {
            anyhow::Ok(Completion::text(format!("reply #{}", prompt.lines().count())))
        });

        let first = a
            .activate(&router, vec![Message::seed("topic", "A")], &capability)
            .await
            .unwrap();
        let second = b
            .activate(&router, vec![first.message.clone()], &capability)
            .await
            .unwrap();
        let third = a
            .activate(&router, vec![second.message.clone()], &capability)
            .await
            .unwrap();

        assert_eq!(second.context, "A: reply #1");
        assert_eq!(third.context, "User: topic\nA: reply #1\nB: reply #1");
        assert_eq!(a.memory().len(), 4);
        assert_eq!(b.memory().len(), 2);
    }

    #[tokio::test]
    async fn test_activate_without_news_is_violation() {
        let (_a, mut b, router) = setup();
        let capability = from_fn(|_p: String| async move { anyhow::Ok(Completion::text("unprompted")) });

        let err = b
            .activate(&router, vec![Message::seed("topic", "A")], &capability)
            .await
            .unwrap_err();
        assert!(matches!(err, DebateError::RoutingViolation(_)));
        assert!(b.memory().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_inbound_only() {
        let (mut a, _b, router) = setup();
        let capability = from_fn(|_p: String| async move { Err::<Completion, _>(anyhow::anyhow!("boom")) });

        let err = a
            .activate(&router, vec![Message::seed("topic", "A")], &capability)
            .await
            .unwrap_err();
        assert!(matches!(err, DebateError::GenerationFailure { .. }));
        assert_eq!(a.memory().len(), 1);
        assert!(a.memory()[0].is_seed());
    }
}
