//! Intent - What an inbound message is asking for

use serde::{Deserialize, Serialize};

/// Keywords used when none are configured
pub const DEFAULT_MENU_KEYWORDS: &[&str] = &["menu", "pdf"];

/// Classified intent of an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user wants the menu document
    MenuRequest,
    /// Anything else; answered by the completion service
    GeneralQuestion,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::MenuRequest => write!(f, "menu_request"),
            Intent::GeneralQuestion => write!(f, "general_question"),
        }
    }
}

/// Trigger strings that mark a message as a menu request
///
/// Matching is a case-insensitive substring test; any hit wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build from arbitrary strings. Blank entries are dropped, the rest are
    /// trimmed, lower-cased and deduplicated.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !out.contains(&kw) {
                out.push(kw);
            }
        }
        Self { keywords: out }
    }

    /// Parse a comma-separated list, e.g. `menu,pdf,cardápio`
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Whether any keyword occurs in `text`
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }

    pub fn classify(&self, text: &str) -> Intent {
        if self.matches(text) {
            Intent::MenuRequest
        } else {
            Intent::GeneralQuestion
        }
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_KEYWORDS.iter().copied())
    }
}
