//! # Feature: Generation Cost Tracking
//!
//! Prices the token usage reported by each debate turn and enforces the budget
//! invested in a run. Once accumulated spend reaches the budget, no further turn
//! may start.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{debug, warn};

use crate::core::{DebateError, Result};
use crate::features::debate::TokenUsage;

/// OpenAI API pricing constants (as of January 2025)
pub mod pricing {
    // GPT-4o pricing (per 1K tokens)
    pub const GPT4O_INPUT_PER_1K: f64 = 0.0025; // $2.50/1M input
    pub const GPT4O_OUTPUT_PER_1K: f64 = 0.01; // $10/1M output

    // GPT-4o-mini pricing (per 1K tokens)
    pub const GPT4O_MINI_INPUT_PER_1K: f64 = 0.00015; // $0.15/1M input
    pub const GPT4O_MINI_OUTPUT_PER_1K: f64 = 0.0006; // $0.60/1M output

    // GPT-4 Turbo pricing (per 1K tokens)
    pub const GPT4_TURBO_INPUT_PER_1K: f64 = 0.01; // $10/1M input
    pub const GPT4_TURBO_OUTPUT_PER_1K: f64 = 0.03; // $30/1M output

    // GPT-4 pricing (per 1K tokens)
    pub const GPT4_INPUT_PER_1K: f64 = 0.03; // $30/1M input
    pub const GPT4_OUTPUT_PER_1K: f64 = 0.06; // $60/1M output

    // GPT-3.5 Turbo pricing (per 1K tokens)
    pub const GPT35_TURBO_INPUT_PER_1K: f64 = 0.0005; // $0.50/1M input
    pub const GPT35_TURBO_OUTPUT_PER_1K: f64 = 0.0015; // $1.50/1M output

    /// Calculate cost for a chat completion based on model
    pub fn calculate_chat_cost(model: &str, input_tokens: u32, output_tokens: u32) -> f64 {
        let model_lower = model.to_lowercase();

        let (input_rate, output_rate) = if model_lower.contains("gpt-4o-mini") {
            (GPT4O_MINI_INPUT_PER_1K, GPT4O_MINI_OUTPUT_PER_1K)
        } else if model_lower.contains("gpt-4o") {
            (GPT4O_INPUT_PER_1K, GPT4O_OUTPUT_PER_1K)
        } else if model_lower.contains("gpt-4-turbo") {
            (GPT4_TURBO_INPUT_PER_1K, GPT4_TURBO_OUTPUT_PER_1K)
        } else if model_lower.contains("gpt-4") {
            (GPT4_INPUT_PER_1K, GPT4_OUTPUT_PER_1K)
        } else {
            // Default to GPT-3.5 Turbo pricing
            (GPT35_TURBO_INPUT_PER_1K, GPT35_TURBO_OUTPUT_PER_1K)
        };

        (input_tokens as f64 / 1000.0 * input_rate) + (output_tokens as f64 / 1000.0 * output_rate)
    }
}

/// Running spend of one debate against its budget
#[derive(Debug, Clone, PartialEq)]
pub struct CostLedger {
    model: String,
    max_budget: f64,
    total_cost: f64,
    prompt_tokens: u64,
    completion_tokens: u64,
}

impl CostLedger {
    pub fn new(model: impl Into<String>, max_budget: f64) -> Self {
        CostLedger {
            model: model.into(),
            max_budget,
            total_cost: 0.0,
            prompt_tokens: 0,
            completion_tokens: 0,
        }
    }

    /// Record one completion's usage. Turns without reported usage cost nothing.
    pub fn record(&mut self, usage: Option<TokenUsage>) -> f64 {
        let Some(usage) = usage else {
            return 0.0;
        };

        let cost =
            pricing::calculate_chat_cost(&self.model, usage.prompt_tokens, usage.completion_tokens);
        self.prompt_tokens += u64::from(usage.prompt_tokens);
        self.completion_tokens += u64::from(usage.completion_tokens);
        self.total_cost += cost;

        debug!(
            "Turn cost ${:.6} ({} in / {} out), total ${:.6} of ${:.2}",
            cost, usage.prompt_tokens, usage.completion_tokens, self.total_cost, self.max_budget
        );
        cost
    }

    /// Fails once accumulated spend has reached the budget
    pub fn check_balance(&self) -> Result<()> {
        if self.total_cost >= self.max_budget {
            warn!(
                "Budget exhausted: ${:.4} spent of ${:.4}",
                self.total_cost, self.max_budget
            );
            return Err(DebateError::BudgetExhausted {
                spent: self.total_cost,
                budget: self.max_budget,
            });
        }
        Ok(())
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn max_budget(&self) -> f64 {
        self.max_budget
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u64 {
        self.completion_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_cost_by_model() {
        let mini = pricing::calculate_chat_cost("gpt-4o-mini", 1000, 1000);
        assert!((mini - 0.00075).abs() < 1e-12);

        let gpt4o = pricing::calculate_chat_cost("GPT-4o", 1000, 1000);
        assert!((gpt4o - 0.0125).abs() < 1e-12);

        let fallback = pricing::calculate_chat_cost("some-local-model", 1000, 1000);
        assert!((fallback - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_ledger_without_usage_is_free() {
        let mut ledger = CostLedger::new("gpt-4o", 1.0);
        assert_eq!(ledger.record(None), 0.0);
        assert_eq!(ledger.total_cost(), 0.0);
        assert!(ledger.check_balance().is_ok());
    }

    #[test]
    fn test_ledger_accumulates_tokens() {
        let mut ledger = CostLedger::new("gpt-4", 10.0);
        let usage = TokenUsage {
            prompt_tokens: 500,
            completion_tokens: 250,
        };
        ledger.record(Some(usage));
        ledger.record(Some(usage));

        assert_eq!(ledger.prompt_tokens(), 1000);
        assert_eq!(ledger.completion_tokens(), 500);
        assert!((ledger.total_cost() - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_ledger_exhausted_at_budget() {
        let mut ledger = CostLedger::new("gpt-4", 0.03);
        ledger.record(Some(TokenUsage {
            prompt_tokens: 1000,
            completion_tokens: 0,
        }));

        let err = ledger.check_balance().unwrap_err();
        assert!(matches!(err, DebateError::BudgetExhausted { .. }));
    }
}
