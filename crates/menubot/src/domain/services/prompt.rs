//! System prompt construction for the concierge assistant

use serde::{Deserialize, Serialize};

/// Who the assistant is and how it talks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantProfile {
    pub business_name: String,
    /// e.g. "a helpful assistant", "the head waiter"
    pub persona: String,
    /// Free-form behavioral instructions
    #[serde(default)]
    pub instructions: String,
    pub tone: String,
    /// Reply language; empty means "whatever the user writes in"
    #[serde(default)]
    pub language: String,
}

impl AssistantProfile {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            ..Self::default()
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for AssistantProfile {
    fn default() -> Self {
        Self {
            business_name: "Gourmet Delight".to_string(),
            persona: "a helpful assistant".to_string(),
            instructions: String::new(),
            tone: "friendly".to_string(),
            language: String::new(),
        }
    }
}

/// Builder for the system prompt sent ahead of each question
pub struct SystemPrompt;

impl SystemPrompt {
    /// Render the system prompt for a profile, one sentence per line.
    /// Empty instructions/language are left out.
    pub fn build(profile: &AssistantProfile) -> String {
        let mut lines = vec![format!(
            "You are {} for {}.",
            profile.persona.trim(),
            profile.business_name.trim()
        )];

        let instructions = profile.instructions.trim();
        if !instructions.is_empty() {
            lines.push(instructions.to_string());
        }

        let tone = profile.tone.trim();
        if !tone.is_empty() {
            lines.push(format!("Respond in a {} tone.", tone));
        }

        let language = profile.language.trim();
        if !language.is_empty() {
            lines.push(format!("Always reply in {}.", language));
        }

        lines.join("\n")
    }
}
