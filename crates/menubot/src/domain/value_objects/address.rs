//! WhatsAppAddress - Canonical WhatsApp sender/recipient identifiers

use serde::{Deserialize, Serialize};

/// Channel tag the provider puts in front of WhatsApp numbers
pub const WHATSAPP_PREFIX: &str = "whatsapp:";

const CANONICAL_PREFIX: &str = "whatsapp:+";

/// A WhatsApp address in canonical `whatsapp:+<digits>` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhatsAppAddress(String);

impl WhatsAppAddress {
    /// Normalize a raw provider identifier.
    ///
    /// `whatsapp:5511999999999` becomes `whatsapp:+5511999999999`. Only a
    /// leading channel tag is rewritten; values that are already canonical,
    /// or do not start with the tag, are returned unchanged. Returns `None`
    /// for an empty value.
    pub fn normalize(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if raw.starts_with(CANONICAL_PREFIX) {
            return Some(Self(raw.to_string()));
        }

        match raw.strip_prefix(WHATSAPP_PREFIX) {
            Some(rest) => Some(Self(format!("{}{}", CANONICAL_PREFIX, rest))),
            None => Some(Self(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for WhatsAppAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WhatsAppAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
