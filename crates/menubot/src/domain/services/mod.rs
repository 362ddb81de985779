//! Domain Services
//!
//! Pure functions over domain types: prompt rendering and reply texts.

mod prompt;
mod replies;

pub use prompt::*;
pub use replies::*;
