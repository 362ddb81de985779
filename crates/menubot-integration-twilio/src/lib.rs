//! Twilio Integration for Menubot
//!
//! This crate provides Twilio WhatsApp integration for the Menubot relay:
//! outbound text/media messages through the Messages API and parsing of
//! inbound webhook form fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use menubot_integration_twilio::{TwilioIntegration, TwilioConfig};
//!
//! let config = TwilioConfig::new("AC...", "auth-token", "whatsapp:+14155238886");
//! let twilio = TwilioIntegration::new(config)?;
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::{MessageResource, TwilioClient, TwilioError};
pub use config::{TwilioConfig, DEFAULT_API_BASE};
pub use integration::TwilioIntegration;
pub use webhook::{
    TwilioWebhookHandler, FIELD_BODY, FIELD_FROM, FIELD_MESSAGE_SID, FIELD_PROFILE_NAME,
};
