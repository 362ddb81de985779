//! Twilio webhook handling
//!
//! Twilio posts inbound WhatsApp messages as `application/x-www-form-urlencoded`
//! with PascalCase field names. Only `Body` and `From` are required here.

use menubot::{DomainError, InboundMessage};
use std::collections::HashMap;
use tracing::debug;

pub const FIELD_BODY: &str = "Body";
pub const FIELD_FROM: &str = "From";
pub const FIELD_MESSAGE_SID: &str = "MessageSid";
pub const FIELD_PROFILE_NAME: &str = "ProfileName";

/// Turns Twilio webhook form fields into domain messages
#[derive(Debug, Default, Clone, Copy)]
pub struct TwilioWebhookHandler;

impl TwilioWebhookHandler {
    pub fn new() -> Self {
        Self
    }

    /// Parse decoded form fields into an [`InboundMessage`].
    ///
    /// Missing or empty `Body`/`From` yields [`DomainError::MissingField`].
    pub fn parse_fields(
        &self,
        fields: &HashMap<String, String>,
    ) -> Result<InboundMessage, DomainError> {
        let body = fields.get(FIELD_BODY).map(String::as_str).unwrap_or_default();
        let from = fields.get(FIELD_FROM).map(String::as_str).unwrap_or_default();

        let mut message = InboundMessage::new(body, from)?;

        if let Some(sid) = non_empty(fields, FIELD_MESSAGE_SID) {
            message = message.with_message_sid(sid);
        }
        if let Some(name) = non_empty(fields, FIELD_PROFILE_NAME) {
            message = message.with_profile_name(name);
        }

        debug!(
            sender = %message.sender,
            message_sid = ?message.message_sid,
            body_len = message.body.len(),
            "Parsed Twilio webhook"
        );

        Ok(message)
    }
}

fn non_empty<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_message() {
        let handler = TwilioWebhookHandler::new();
        let msg = handler
            .parse_fields(&fields(&[
                ("Body", "Can I see the menu?"),
                ("From", "whatsapp:5511999999999"),
                ("MessageSid", "SM123"),
                ("ProfileName", "Ana"),
                ("NumMedia", "0"),
            ]))
            .unwrap();

        assert_eq!(msg.body, "Can I see the menu?");
        assert_eq!(msg.sender.as_str(), "whatsapp:+5511999999999");
        assert_eq!(msg.message_sid.as_deref(), Some("SM123"));
        assert_eq!(msg.profile_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_empty_body_is_missing_field() {
        let handler = TwilioWebhookHandler::new();
        let err = handler
            .parse_fields(&fields(&[("Body", ""), ("From", "whatsapp:+5511999999999")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingField));
    }

    #[test]
    fn test_absent_from_is_missing_field() {
        let handler = TwilioWebhookHandler::new();
        let err = handler
            .parse_fields(&fields(&[("Body", "hi")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingField));
    }

    #[test]
    fn test_blank_optional_fields_are_ignored() {
        let handler = TwilioWebhookHandler::new();
        let msg = handler
            .parse_fields(&fields(&[
                ("Body", "hi"),
                ("From", "whatsapp:+1"),
                ("ProfileName", ""),
            ]))
            .unwrap();
        assert!(msg.profile_name.is_none());
    }
}
