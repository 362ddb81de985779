//! Domain Entities
//!
//! Per-request message models without infrastructure dependencies.
//! - InboundMessage: what the provider webhook delivered
//! - OutboundReply: what gets sent back

mod message;

pub use message::*;
