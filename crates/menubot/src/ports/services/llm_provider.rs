//! LLM Provider Port
//!
//! Abstract interface for chat-completion invocations. The relay only ever
//! sends a system prompt plus one user turn, but the message list is kept
//! general so providers can be swapped (OpenAI, a local model, a mock).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::CompletionError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for a completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Model identifier, e.g. "gpt-4.1"
    pub model: String,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4.1".to_string(),
            temperature: Some(0.7),
            max_tokens: None,
        }
    }
}

/// Completion provider interface
///
/// # Example
///
/// ```rust,ignore
/// use menubot::ports::CompletionProvider;
///
/// struct OpenAiProvider { /* reqwest client */ }
///
/// #[async_trait]
/// impl CompletionProvider for OpenAiProvider {
///     async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
///         -> Result<String, CompletionError> {
///         // POST /v1/chat/completions
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate the assistant's reply text for a conversation
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, CompletionError>;

    /// System prompt plus a single user turn
    async fn complete_with_system(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        let messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_message),
        ];
        self.complete(&messages, options).await
    }

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;
}
