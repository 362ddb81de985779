//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod address;
mod intent;

pub use address::*;
pub use intent::*;
