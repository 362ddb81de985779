//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the messaging and completion ports.

mod relay_service;

pub use relay_service::{RelayOutcome, RelayService, RelaySettings};
