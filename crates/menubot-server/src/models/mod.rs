//! API Models

mod webhook;

pub use webhook::*;
