//! Environment configuration
//!
//! Everything the relay needs is read from environment variables once at
//! startup (`.env` is loaded first if present).

use std::time::Duration;
use thiserror::Error;

use menubot::{AssistantProfile, CompletionOptions, KeywordSet, WhatsAppAddress};
use menubot_integration_twilio::TwilioConfig;

use crate::adapters::OpenAiConfig;
use crate::application::RelaySettings;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MODEL: &str = "gpt-4.1";
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub twilio: TwilioConfig,
    pub openai: OpenAiConfig,
    pub model: String,
    pub temperature: f32,
    pub profile: AssistantProfile,
    pub menu_url: String,
    pub keywords: KeywordSet,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let timeout = Duration::from_secs(parse_or(
            get("HTTP_TIMEOUT_SECS"),
            "HTTP_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?);

        let from_raw = require("TWILIO_WHATSAPP_NUMBER")?;
        let from = WhatsAppAddress::normalize(&from_raw)
            .map(WhatsAppAddress::into_inner)
            .unwrap_or(from_raw);

        let mut twilio = TwilioConfig::new(
            require("TWILIO_ACCOUNT_SID")?,
            require("TWILIO_AUTH_TOKEN")?,
            from,
        )
        .with_timeout(timeout);
        if let Some(base) = get("TWILIO_API_BASE") {
            twilio = twilio.with_api_base(base);
        }

        let mut openai = OpenAiConfig::new(require("OPENAI_API_KEY")?).with_timeout(timeout);
        if let Some(base) = get("OPENAI_API_BASE") {
            openai = openai.with_api_base(base);
        }

        let temperature = parse_or(
            get("OPENAI_TEMPERATURE"),
            "OPENAI_TEMPERATURE",
            DEFAULT_TEMPERATURE,
        )?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Invalid {
                key: "OPENAI_TEMPERATURE",
                message: format!("{} is outside 0.0..=2.0", temperature),
            });
        }

        let defaults = AssistantProfile::default();
        let profile = AssistantProfile {
            business_name: get("BUSINESS_NAME").unwrap_or(defaults.business_name),
            persona: get("ASSISTANT_PERSONA").unwrap_or(defaults.persona),
            instructions: get("ASSISTANT_INSTRUCTIONS").unwrap_or(defaults.instructions),
            tone: get("ASSISTANT_TONE").unwrap_or(defaults.tone),
            language: get("ASSISTANT_LANGUAGE").unwrap_or(defaults.language),
        };

        let keywords = match get("MENU_KEYWORDS") {
            Some(csv) => KeywordSet::from_csv(&csv),
            None => KeywordSet::default(),
        };
        if keywords.is_empty() {
            return Err(ConfigError::Invalid {
                key: "MENU_KEYWORDS",
                message: "no keywords left after parsing".to_string(),
            });
        }

        Ok(Self {
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            twilio,
            openai,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            profile,
            menu_url: require("MENU_URL")?,
            keywords,
        })
    }

    /// Settings handed to the relay service
    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            profile: self.profile.clone(),
            menu_url: self.menu_url.clone(),
            keywords: self.keywords.clone(),
            completion: CompletionOptions {
                model: self.model.clone(),
                temperature: Some(self.temperature),
                max_tokens: None,
            },
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
