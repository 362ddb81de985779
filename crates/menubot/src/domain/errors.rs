//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Message returned to the webhook caller when a required field is absent
pub const MISSING_FIELD_MESSAGE: &str = "Missing Body or From";

/// Domain layer errors
///
/// `Display` output is what the webhook caller sees in `{"error": ...}`,
/// so provider failures carry the provider's text unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing Body or From")]
    MissingField,

    #[error("{0}")]
    Messaging(String),

    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::MissingField => 400,
            DomainError::Messaging(_) | DomainError::Unexpected(_) => 500,
        }
    }
}

/// Failure of a language-model completion call
///
/// Never surfaced to the webhook caller; see [`crate::fallback_reply`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited by completion service")]
    RateLimited,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
