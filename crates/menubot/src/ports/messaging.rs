//! Messaging Provider Port
//!
//! Abstract interface for the platform that delivers replies to the end
//! user (Twilio's WhatsApp API in production).
//!
//! Implementations of this trait live in separate crates
//! (e.g., menubot-integration-twilio).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::OutboundReply;
use crate::domain::errors::DomainError;

/// Provider acknowledgement for a queued message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Provider message ID
    pub sid: String,
    /// Provider status at acceptance time ("queued", "accepted", ...)
    pub status: Option<String>,
}

/// Messaging platform interface
///
/// Errors are reported as [`DomainError::Messaging`] carrying the
/// provider's own error text.
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Send a text-only reply
    async fn send_text(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError>;

    /// Send a reply with a media attachment
    async fn send_media(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError>;

    /// Dispatch on whether the reply carries media
    async fn send(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        if reply.has_media() {
            self.send_media(reply).await
        } else {
            self.send_text(reply).await
        }
    }

    /// Get the integration name (e.g., "twilio")
    fn name(&self) -> &str;
}
