//! # Configuration
//!
//! Environment-driven process configuration plus the immutable per-run settings.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serde::{Deserialize, Serialize};
use std::env;

use super::error::{DebateError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PARTICIPANTS_PATH: &str = "participants.json";
pub const DEFAULT_PROMPT_TEMPLATE_PATH: &str = "prompt/prompt_template.yaml";

/// Process-level settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub log_level: String,
    pub participants_path: String,
    pub prompt_template_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Config {
            openai_api_key,
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            log_level: env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            participants_path: env_or("PARTICIPANTS_PATH", DEFAULT_PARTICIPANTS_PATH),
            prompt_template_path: env_or("PROMPT_TEMPLATE_PATH", DEFAULT_PROMPT_TEMPLATE_PATH),
        })
    }

    /// The API key, or a configuration error when the OpenAI capability needs one
    pub fn require_api_key(&self) -> Result<&str> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| DebateError::config("OPENAI_API_KEY is not set"))
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Settings for a single debate run. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Topic handed to the first speaker as the seed message
    pub topic: String,
    /// Number of rounds; each round is one activation of each participant
    pub round_count: u32,
    /// Maximum generation spend in USD
    pub budget: f64,
}

impl RunConfig {
    pub fn new(topic: impl Into<String>, round_count: u32, budget: f64) -> Result<Self> {
        let config = RunConfig {
            topic: topic.into(),
            round_count,
            budget,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(DebateError::config("Debate topic must not be empty"));
        }
        if self.round_count == 0 {
            return Err(DebateError::config("round_count must be at least 1"));
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(DebateError::config(format!(
                "budget must be a positive amount, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_valid() {
        let config = RunConfig::new("Is X better than Y?", 2, 3.0).unwrap();
        assert_eq!(config.round_count, 2);
        assert_eq!(config.topic, "Is X better than Y?");
    }

    #[test]
    fn test_run_config_rejects_zero_rounds() {
        let err = RunConfig::new("topic", 0, 3.0).unwrap_err();
        assert!(matches!(err, DebateError::Configuration(_)));
    }

    #[test]
    fn test_run_config_rejects_blank_topic() {
        assert!(RunConfig::new("   ", 1, 3.0).is_err());
    }

    #[test]
    fn test_run_config_rejects_bad_budget() {
        assert!(RunConfig::new("topic", 1, 0.0).is_err());
        assert!(RunConfig::new("topic", 1, -1.0).is_err());
        assert!(RunConfig::new("topic", 1, f64::NAN).is_err());
    }

    #[test]
    fn test_default_template_path_is_bundled_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_PROMPT_TEMPLATE_PATH);
        assert!(path.is_file(), "{} is missing", path.display());
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = Config {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            participants_path: DEFAULT_PARTICIPANTS_PATH.to_string(),
            prompt_template_path: DEFAULT_PROMPT_TEMPLATE_PATH.to_string(),
        };
        assert!(config.require_api_key().is_err());
    }
}
