//! WhatsApp Webhook Route
//!
//! Receives inbound messages from Twilio and relays one reply back.

use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use std::collections::HashMap;

use menubot_integration_twilio::TwilioWebhookHandler;

use crate::models::{ApiError, ErrorResponse, WebhookAck, WebhookForm};
use crate::AppState;

/// Handle an inbound WhatsApp message
#[utoipa::path(
    post,
    path = "/whatsapp-webhook",
    request_body(
        content = WebhookForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Reply sent", body = WebhookAck),
        (status = 400, description = "Missing Body or From", body = ErrorResponse),
        (status = 500, description = "Sending the reply failed", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
pub async fn whatsapp_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Json<WebhookAck>, ApiError> {
    tracing::info!("=== INCOMING REQUEST ===");
    tracing::debug!(headers = ?headers, "Headers");

    // An unreadable body is treated like an empty form
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Could not read webhook form");
            HashMap::new()
        }
    };
    tracing::debug!(fields = ?fields, "Form data");

    let message = TwilioWebhookHandler::new()
        .parse_fields(&fields)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejecting webhook"))?;

    let outcome = state.relay.handle(&message).await?;
    let elapsed = chrono::Utc::now() - message.received_at;
    tracing::info!(
        intent = %outcome.intent,
        sid = %outcome.receipt.sid,
        used_fallback = outcome.used_fallback,
        elapsed_ms = elapsed.num_milliseconds(),
        "=== REQUEST HANDLED ==="
    );

    Ok(Json(WebhookAck::ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/whatsapp-webhook", post(whatsapp_webhook))
}
