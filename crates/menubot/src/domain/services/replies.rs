//! Fixed reply texts: the menu caption and the completion fallback

use crate::domain::errors::CompletionError;

/// Sent instead of a generated answer when the completion service is saturated
pub const OVERLOADED_REPLY: &str =
    "⚠️ Sorry, our AI service is currently overloaded. Please try again later.";

/// Caption attached to the menu document
pub fn menu_caption(business_name: &str) -> String {
    format!("Here's the menu for {}! 🍽️", business_name)
}

/// Map a completion failure to the text the user receives instead.
///
/// The user always gets a reply; only the wording depends on the failure.
pub fn fallback_reply(err: &CompletionError) -> String {
    match err {
        CompletionError::RateLimited => OVERLOADED_REPLY.to_string(),
        other => format!("⚠️ Error: {}", other),
    }
}

/// Resolve a completion result to the text that will be sent
pub fn reply_or_fallback(result: Result<String, CompletionError>) -> String {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Completion failed, sending fallback reply");
        fallback_reply(&e)
    })
}
