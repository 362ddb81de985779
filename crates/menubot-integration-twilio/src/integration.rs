//! MessagingProvider implementation for Twilio

use async_trait::async_trait;
use menubot::{DomainError, MessagingProvider, OutboundReply, SendReceipt};
use tracing::debug;

use crate::client::{MessageResource, TwilioClient, TwilioError};
use crate::config::TwilioConfig;

/// Twilio integration implementing the MessagingProvider port
pub struct TwilioIntegration {
    client: TwilioClient,
}

impl TwilioIntegration {
    /// Create a new Twilio integration
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioError> {
        let client = TwilioClient::new(config)?;
        Ok(Self { client })
    }
}

fn to_receipt(result: Result<MessageResource, TwilioError>) -> Result<SendReceipt, DomainError> {
    result
        .map(|m| SendReceipt {
            sid: m.sid,
            status: m.status,
        })
        .map_err(|e| DomainError::Messaging(e.to_string()))
}

#[async_trait]
impl MessagingProvider for TwilioIntegration {
    async fn send_text(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        let body = reply.body.as_deref().unwrap_or_default();
        debug!(to = %reply.recipient, "Sending text reply");

        to_receipt(self.client.send_text(reply.recipient.as_str(), body).await)
    }

    async fn send_media(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        let media_url = reply.media_url.as_deref().ok_or_else(|| {
            DomainError::Unexpected("Media reply without a media URL".to_string())
        })?;
        debug!(to = %reply.recipient, media_url = %media_url, "Sending media reply");

        to_receipt(
            self.client
                .send_media(reply.recipient.as_str(), reply.body.as_deref(), media_url)
                .await,
        )
    }

    fn name(&self) -> &str {
        "twilio"
    }
}
