//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.
//! The messaging side lives in `menubot-integration-twilio`.

pub mod openai;

// Re-exports
pub use openai::{OpenAiConfig, OpenAiProvider};
