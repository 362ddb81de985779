//! Twilio Messages API client

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::TwilioConfig;

/// Twilio API errors
#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} error: {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },
}

/// Successful message creation
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<u32>,
    message: String,
}

/// Twilio API client
pub struct TwilioClient {
    http: Client,
    config: TwilioConfig,
}

impl TwilioClient {
    /// Create a new Twilio client
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TwilioError::Build(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Create a message. `media_url` turns it into a media message.
    pub async fn create_message(
        &self,
        to: &str,
        body: Option<&str>,
        media_url: Option<&str>,
    ) -> Result<MessageResource, TwilioError> {
        debug!(
            to = %to,
            body_len = body.map(str::len).unwrap_or(0),
            has_media = media_url.is_some(),
            "Sending message via Twilio"
        );

        let mut form: Vec<(&str, &str)> = vec![("To", to), ("From", self.config.from.as_str())];
        if let Some(body) = body {
            form.push(("Body", body));
        }
        if let Some(url) = media_url {
            form.push(("MediaUrl", url));
        }

        let response = self
            .http
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Twilio request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let err = map_api_error(status, &text);
            error!(error = %err, "Twilio rejected message");
            return Err(err);
        }

        // A 2xx means the message was queued even if the body is unreadable
        let text = response.text().await.unwrap_or_default();
        let resource = serde_json::from_str::<MessageResource>(&text).unwrap_or_else(|e| {
            warn!(error = %e, status = %status, "Could not decode Twilio acceptance body");
            MessageResource {
                sid: String::new(),
                status: None,
            }
        });
        debug!(sid = %resource.sid, "Twilio accepted message");
        Ok(resource)
    }

    /// Send a text message
    pub async fn send_text(&self, to: &str, body: &str) -> Result<MessageResource, TwilioError> {
        self.create_message(to, Some(body), None).await
    }

    /// Send a media message with an optional caption
    pub async fn send_media(
        &self,
        to: &str,
        caption: Option<&str>,
        media_url: &str,
    ) -> Result<MessageResource, TwilioError> {
        self.create_message(to, caption, Some(media_url)).await
    }
}

fn map_api_error(status: StatusCode, body: &str) -> TwilioError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => TwilioError::Api {
            status: status.as_u16(),
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => TwilioError::Api {
            status: status.as_u16(),
            code: None,
            message: body.to_string(),
        },
    }
}
