//! # Message Router
//!
//! Decides which pending messages an agent may react to. Each agent subscribes to a
//! single predicate, `recipient == self`, evaluated statelessly per activation.
//! Every message is also checked against the two-party addressing rules; a breach
//! is a [`DebateError::RoutingViolation`] and is never dropped silently.

use log::{debug, warn};

use super::message::{Message, SEED_SENDER};
use crate::core::{DebateError, Result};
use crate::features::participants::Participant;

#[derive(Debug, Clone)]
pub struct MessageRouter {
    first: String,
    second: String,
}

impl MessageRouter {
    pub fn new(first: &Participant, second: &Participant) -> Self {
        MessageRouter {
            first: first.name.clone(),
            second: second.name.clone(),
        }
    }

    fn is_known(&self, name: &str) -> bool {
        name == self.first || name == self.second
    }

    /// Check a single message against the addressing invariants
    pub fn validate(&self, msg: &Message) -> Result<()> {
        if !self.is_known(msg.recipient()) {
            return Err(DebateError::routing(format!(
                "message {} addressed to unknown participant '{}'",
                msg.id(),
                msg.recipient()
            )));
        }

        if msg.is_seed() {
            if msg.sender() != SEED_SENDER {
                return Err(DebateError::routing(format!(
                    "seed message {} sent by '{}'",
                    msg.id(),
                    msg.sender()
                )));
            }
            return Ok(());
        }

        if !self.is_known(msg.sender()) {
            return Err(DebateError::routing(format!(
                "message {} sent by unknown participant '{}'",
                msg.id(),
                msg.sender()
            )));
        }
        if msg.sender() == msg.recipient() {
            return Err(DebateError::routing(format!(
                "message {} from '{}' is addressed to itself",
                msg.id(),
                msg.sender()
            )));
        }
        Ok(())
    }

    /// Messages from `pending` that are newly visible to `agent`, in order.
    ///
    /// Messages the agent authored itself are never returned.
    pub fn route(&self, pending: Vec<Message>, agent: &Participant) -> Result<Vec<Message>> {
        if !self.is_known(&agent.name) {
            return Err(DebateError::routing(format!(
                "'{}' is not a participant of this debate",
                agent.name
            )));
        }

        let total = pending.len();
        let mut visible = Vec::with_capacity(total);
        for msg in pending {
            self.validate(&msg)?;
            if msg.sender() != agent.name && msg.is_addressed_to(&agent.name) {
                visible.push(msg);
            }
        }

        if visible.len() < total {
            warn!(
                "{} of {} pending message(s) not addressed to {}",
                total - visible.len(),
                total,
                agent.name
            );
        }
        debug!("Routed {} message(s) to {}", visible.len(), agent.name);
        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Participant, Participant) {
        (
            Participant::new("A", "Optimist", "B"),
            Participant::new("B", "Skeptic", "A"),
        )
    }

    #[test]
    fn test_seed_visible_only_to_first_speaker() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let seed = Message::seed("topic", "A");

        let for_a = router.route(vec![seed.clone()], &a).unwrap();
        assert_eq!(for_a, vec![seed.clone()]);

        let for_b = router.route(vec![seed], &b).unwrap();
        assert!(for_b.is_empty());
    }

    #[test]
    fn test_own_message_never_routed_back() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let from_a = Message::response(&a, "hello");

        assert!(router.route(vec![from_a.clone()], &a).unwrap().is_empty());
        assert_eq!(router.route(vec![from_a.clone()], &b).unwrap(), vec![from_a]);
    }

    #[test]
    fn test_mixed_batch_keeps_order() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let first = Message::response(&b, "one");
        let own = Message::response(&a, "mine");
        let second = Message::response(&b, "two");

        let routed = router
            .route(vec![first.clone(), own, second.clone()], &a)
            .unwrap();
        assert_eq!(routed, vec![first, second]);
    }

    #[test]
    fn test_unknown_recipient_is_violation() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let stray = Message::response(&Participant::new("A", "", "C"), "hi");

        let err = router.route(vec![stray], &b).unwrap_err();
        assert!(matches!(err, DebateError::RoutingViolation(_)));
    }

    #[test]
    fn test_unknown_sender_is_violation() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let stray = Message::response(&Participant::new("Z", "", "A"), "hi");
        assert!(router.route(vec![stray], &a).is_err());
    }

    #[test]
    fn test_self_addressed_is_violation() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let echo = Message::response(&Participant::new("A", "", "A"), "me");
        assert!(matches!(
            router.validate(&echo),
            Err(DebateError::RoutingViolation(_))
        ));
    }

    #[test]
    fn test_stranger_agent_is_violation() {
        let (a, b) = pair();
        let router = MessageRouter::new(&a, &b);
        let stranger = Participant::new("C", "", "A");
        assert!(router.route(Vec::new(), &stranger).is_err());
    }
}
