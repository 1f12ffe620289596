//! # Round Scheduler
//!
//! Drives a debate: seeds the first speaker with the topic, then alternates
//! activations for exactly `round_count` rounds. Activations are strictly
//! sequential and each hands exactly one message to the opponent.

use log::{debug, error, info};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::agent::Agent;
use super::generation::GenerationCapability;
use super::message::Message;
use super::router::MessageRouter;
use crate::core::{DebateError, RunConfig};
use crate::features::analytics::CostLedger;
use crate::features::participants::roster::validate_pair;

/// Timing of one activation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnRecord {
    pub round: u32,
    pub speaker: String,
    pub elapsed: Duration,
}

/// Chronological record of a run: the seed followed by every agent message
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
    turns: Vec<TurnRecord>,
    total_cost: f64,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages produced by the debaters, excluding the seed
    pub fn agent_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_seed())
    }

    /// Total time `speaker` spent generating
    pub fn speaking_time(&self, speaker: &str) -> Duration {
        self.turns
            .iter()
            .filter(|t| t.speaker == speaker)
            .map(|t| t.elapsed)
            .sum()
    }

    /// Generation spend recorded for this run, in USD
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// A run that stopped before completing its rounds
#[derive(Debug, Error)]
#[error("Debate aborted after {} message(s): {error}", .transcript.len())]
pub struct Aborted {
    /// Everything recorded up to the failure point
    pub transcript: Transcript,
    #[source]
    pub error: DebateError,
}

pub struct RoundScheduler<G> {
    config: RunConfig,
    capability: G,
    ledger: CostLedger,
}

impl<G: GenerationCapability> RoundScheduler<G> {
    pub fn new(config: RunConfig, capability: G) -> Self {
        let ledger = CostLedger::new(capability.model(), config.budget);
        RoundScheduler {
            config,
            capability,
            ledger,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    /// Run the debate with `first` speaking first in every round.
    ///
    /// Any failure aborts the whole run; the partial transcript is returned in
    /// [`Aborted`] and no turn is ever skipped or made up.
    pub async fn run(&mut self, first: &mut Agent, second: &mut Agent) -> Result<Transcript, Aborted> {
        self.run_with(first, second, |_, _| {}).await
    }

    /// Like [`run`](Self::run), calling `on_turn` as soon as each activation completes
    pub async fn run_with<F>(
        &mut self,
        first: &mut Agent,
        second: &mut Agent,
        mut on_turn: F,
    ) -> Result<Transcript, Aborted>
    where
        F: FnMut(&Message, &TurnRecord),
    {
        let mut transcript = Transcript::default();

        if let Err(error) = self
            .config
            .validate()
            .and_then(|_| validate_pair(first.identity(), second.identity()))
        {
            error!("Refusing to start debate: {error}");
            return Err(Aborted { transcript, error });
        }

        let router = MessageRouter::new(first.identity(), second.identity());
        let rounds = self.config.round_count;

        info!(
            "Starting debate: {} vs {} on '{}' ({} rounds, budget ${:.2})",
            first.name(),
            second.name(),
            self.config.topic,
            rounds,
            self.config.budget
        );

        let seed = Message::seed(self.config.topic.clone(), first.name());
        transcript.messages.push(seed.clone());

        // Single-slot hand-off between consecutive activations
        let mut pending = vec![seed];

        for round in 1..=rounds {
            for speaker in [&mut *first, &mut *second] {
                debug!("Round {}/{}: {} responding", round, rounds, speaker.name());

                if let Err(error) = self.ledger.check_balance() {
                    return Err(self.abort(transcript, error));
                }

                let started = Instant::now();
                let result = speaker
                    .activate(&router, std::mem::take(&mut pending), &self.capability)
                    .await;
                let elapsed = started.elapsed();

                let turn = match result {
                    Ok(turn) => turn,
                    Err(error) => return Err(self.abort(transcript, error)),
                };

                info!("{} spoke for {:.2} seconds", speaker.name(), elapsed.as_secs_f64());

                self.ledger.record(turn.usage);
                transcript.total_cost = self.ledger.total_cost();
                let record = TurnRecord {
                    round,
                    speaker: speaker.name().to_string(),
                    elapsed,
                };
                on_turn(&turn.message, &record);
                transcript.turns.push(record);
                transcript.messages.push(turn.message.clone());
                pending = vec![turn.message];
            }
        }

        info!(
            "Debate completed: {} vs {} on '{}' ({} messages, ${:.4})",
            first.name(),
            second.name(),
            self.config.topic,
            transcript.len(),
            self.ledger.total_cost()
        );
        Ok(transcript)
    }

    fn abort(&self, mut transcript: Transcript, error: DebateError) -> Aborted {
        transcript.total_cost = self.ledger.total_cost();
        error!(
            "Debate on '{}' aborted after {} message(s): {}",
            self.config.topic,
            transcript.len(),
            error
        );
        Aborted { transcript, error }
    }
}
