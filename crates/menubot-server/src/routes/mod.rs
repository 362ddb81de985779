//! Menubot API Routes
//!
//! - /whatsapp-webhook - Inbound WhatsApp messages (Twilio)
//! - /health - Liveness
//! - /api-docs/openapi.json - OpenAPI document

pub mod health;
pub mod swagger;
pub mod webhook;
