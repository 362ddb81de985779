//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use axum::Json;
use utoipa::OpenApi;

use crate::models::{ErrorResponse, WebhookAck, WebhookForm};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(super::webhook::whatsapp_webhook, super::health::health_check),
    components(schemas(WebhookForm, WebhookAck, ErrorResponse, HealthCheck)),
    tags(
        (name = "Webhook", description = "Inbound WhatsApp messages"),
        (name = "Health", description = "Liveness")
    ),
    info(title = "Menubot API", description = "WhatsApp menu and concierge relay")
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
