//! Relay Application Service (Use Case)
//!
//! Classifies an inbound WhatsApp message and sends exactly one reply:
//! the menu document, or a generated answer (fallback text if generation
//! fails).

use std::sync::Arc;

use menubot::{
    menu_caption, reply_or_fallback, AssistantProfile, CompletionOptions, CompletionProvider,
    DomainError, InboundMessage, Intent, KeywordSet, MessagingProvider, OutboundReply,
    SendReceipt, SystemPrompt,
};

/// Per-deployment values for the relay
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub profile: AssistantProfile,
    pub menu_url: String,
    pub keywords: KeywordSet,
    pub completion: CompletionOptions,
}

/// What the relay did for one message
#[derive(Debug, Clone)]
pub struct RelayOutcome {
    pub intent: Intent,
    pub receipt: SendReceipt,
    /// The completion call failed and the fallback text was sent instead
    pub used_fallback: bool,
}

/// Application service for the webhook relay
pub struct RelayService {
    messaging: Arc<dyn MessagingProvider>,
    completion: Arc<dyn CompletionProvider>,
    settings: RelaySettings,
    system_prompt: String,
}

impl RelayService {
    pub fn new(
        messaging: Arc<dyn MessagingProvider>,
        completion: Arc<dyn CompletionProvider>,
        settings: RelaySettings,
    ) -> Self {
        let system_prompt = SystemPrompt::build(&settings.profile);
        tracing::debug!(
            messaging = messaging.name(),
            completion = completion.provider_name(),
            "Relay providers wired"
        );
        Self {
            messaging,
            completion,
            settings,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Handle one inbound message
    pub async fn handle(&self, message: &InboundMessage) -> Result<RelayOutcome, DomainError> {
        let text = message.normalized_body();
        let intent = self.settings.keywords.classify(&text);

        tracing::info!(
            sender = %message.sender,
            intent = %intent,
            "Handling inbound message"
        );

        match intent {
            Intent::MenuRequest => self.send_menu(message).await,
            Intent::GeneralQuestion => self.answer_question(message, &text).await,
        }
    }

    async fn send_menu(&self, message: &InboundMessage) -> Result<RelayOutcome, DomainError> {
        let reply = OutboundReply::media(
            message.sender.clone(),
            menu_caption(&self.settings.profile.business_name),
            self.settings.menu_url.clone(),
        );

        let receipt = self
            .messaging
            .send(&reply)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to send menu"))?;

        tracing::info!(sid = %receipt.sid, "📄 Menu sent");

        Ok(RelayOutcome {
            intent: Intent::MenuRequest,
            receipt,
            used_fallback: false,
        })
    }

    async fn answer_question(
        &self,
        message: &InboundMessage,
        text: &str,
    ) -> Result<RelayOutcome, DomainError> {
        let result = self
            .completion
            .complete_with_system(&self.system_prompt, text, &self.settings.completion)
            .await;
        let used_fallback = result.is_err();
        let reply_text = reply_or_fallback(result);

        let reply = OutboundReply::text(message.sender.clone(), reply_text);
        let receipt = self
            .messaging
            .send(&reply)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to send reply"))?;

        tracing::info!(sid = %receipt.sid, used_fallback, "💬 Reply sent");

        Ok(RelayOutcome {
            intent: Intent::GeneralQuestion,
            receipt,
            used_fallback,
        })
    }
}
