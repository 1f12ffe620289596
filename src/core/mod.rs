//! # Core Module
//!
//! Core configuration and error types shared by every debate component.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, RunConfig};
pub use error::{DebateError, Result};
