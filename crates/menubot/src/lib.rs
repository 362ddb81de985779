//! Menubot Domain Library
//!
//! Core domain types and interfaces for the Menubot WhatsApp relay.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: InboundMessage, OutboundReply
//!   - `value_objects/`: WhatsAppAddress, Intent, KeywordSet
//!   - `services/`: System prompt rendering, menu caption, completion fallback
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `messaging`: Reply delivery (Twilio)
//!   - `services/`: Completion service (OpenAI)
//!
//! # Usage
//!
//! ```rust,ignore
//! use menubot::{InboundMessage, KeywordSet, Intent};
//!
//! let msg = InboundMessage::new("Can I see the menu?", "whatsapp:5511999999999")?;
//! assert_eq!(KeywordSet::default().classify(&msg.body), Intent::MenuRequest);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    fallback_reply, menu_caption, reply_or_fallback, AssistantProfile, CompletionError,
    DomainError, InboundMessage, Intent, KeywordSet, OutboundReply, SystemPrompt,
    WhatsAppAddress, DEFAULT_MENU_KEYWORDS, MISSING_FIELD_MESSAGE, OVERLOADED_REPLY,
    WHATSAPP_PREFIX,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionProvider, MessageRole, MessagingProvider,
    SendReceipt,
};
