//! Message Entities
//!
//! The inbound WhatsApp message and the single reply sent back for it.
//! Neither is persisted; both live for one webhook request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::WhatsAppAddress;

/// A message received from the provider webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message text as sent by the user
    pub body: String,
    /// Sender in canonical form
    pub sender: WhatsAppAddress,
    /// Provider message ID, if supplied
    #[serde(default)]
    pub message_sid: Option<String>,
    /// Sender display name, if supplied
    #[serde(default)]
    pub profile_name: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Create an inbound message from raw webhook values.
    ///
    /// Fails with [`DomainError::MissingField`] if either value is empty.
    pub fn new(body: impl Into<String>, from: &str) -> Result<Self, DomainError> {
        let body = body.into();
        if body.is_empty() {
            return Err(DomainError::MissingField);
        }
        let sender = WhatsAppAddress::normalize(from).ok_or(DomainError::MissingField)?;

        Ok(Self {
            body,
            sender,
            message_sid: None,
            profile_name: None,
            received_at: Utc::now(),
        })
    }

    pub fn with_message_sid(mut self, sid: impl Into<String>) -> Self {
        self.message_sid = Some(sid.into());
        self
    }

    pub fn with_profile_name(mut self, name: impl Into<String>) -> Self {
        self.profile_name = Some(name.into());
        self
    }

    /// Lower-cased body, used for keyword matching and as the completion input
    pub fn normalized_body(&self) -> String {
        self.body.to_lowercase()
    }
}

/// A reply handed once to the provider's send API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub recipient: WhatsAppAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl OutboundReply {
    /// Plain text reply
    pub fn text(recipient: WhatsAppAddress, body: impl Into<String>) -> Self {
        Self {
            recipient,
            body: Some(body.into()),
            media_url: None,
        }
    }

    /// Media reply with a caption
    pub fn media(
        recipient: WhatsAppAddress,
        caption: impl Into<String>,
        media_url: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            body: Some(caption.into()),
            media_url: Some(media_url.into()),
        }
    }

    pub fn has_media(&self) -> bool {
        self.media_url.is_some()
    }
}
