//! Menubot Server
//!
//! HTTP surface and infrastructure adapters for the Menubot relay.
//! The binary in `main.rs` wires configuration, clients and this router.

use axum::{response::IntoResponse, response::Response, routing::get, Router};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use application::RelayService;
use models::ApiError;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay: RelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Turn a handler panic into `500 {"error": ...}`
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    tracing::error!(error = %message, "!!! CRITICAL ERROR");
    ApiError::internal(message).into_response()
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api-docs/openapi.json", get(routes::swagger::openapi_json))
        .merge(routes::webhook::router())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
