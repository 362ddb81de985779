//! Webhook API models

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use menubot::DomainError;

/// Fields of the Twilio webhook the relay reads
///
/// Twilio sends many more (MessageSid, ProfileName, NumMedia, ...); they
/// are accepted and logged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookForm {
    /// Message text
    #[serde(rename = "Body")]
    pub body: String,
    /// Sender, e.g. `whatsapp:+5511999999999`
    #[serde(rename = "From")]
    pub from: String,
}

/// Success acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub success: bool,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned from route handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
