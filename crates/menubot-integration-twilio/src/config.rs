//! Twilio configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.twilio.com";

/// Configuration for the Twilio integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    /// Account SID (basic-auth user)
    pub account_sid: String,
    /// Auth token (basic-auth password)
    pub auth_token: String,
    /// Sender address, e.g. `whatsapp:+14155238886`
    pub from: String,
    /// API base URL, overridable for tests
    pub api_base: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl TwilioConfig {
    /// Create a new configuration against the production API
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from: from.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Messages resource for this account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}
