//! HTTP tests for the WhatsApp webhook
//!
//! Drives the full axum router with in-memory messaging and completion
//! providers, so no network access is needed.
//!
//! Run with: `cargo test -p menubot-server --test webhook_routes`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use menubot::{
    AssistantProfile, ChatMessage, CompletionError, CompletionOptions, CompletionProvider,
    DomainError, KeywordSet, MessagingProvider, OutboundReply, SendReceipt,
};
use menubot_server::application::{RelayService, RelaySettings};
use menubot_server::{build_router, AppState};

const MENU_URL: &str = "https://example.com/menu.pdf";

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Default)]
struct MockMessaging {
    texts: Mutex<Vec<OutboundReply>>,
    media: Mutex<Vec<OutboundReply>>,
    fail_with: Option<String>,
}

impl MockMessaging {
    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn result(&self) -> Result<SendReceipt, DomainError> {
        match &self.fail_with {
            Some(msg) => Err(DomainError::Messaging(msg.clone())),
            None => Ok(SendReceipt {
                sid: "SM-test".into(),
                status: Some("queued".into()),
            }),
        }
    }
}

#[async_trait]
impl MessagingProvider for MockMessaging {
    async fn send_text(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        self.texts.lock().unwrap().push(reply.clone());
        self.result()
    }

    async fn send_media(&self, reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        self.media.lock().unwrap().push(reply.clone());
        self.result()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Messaging provider whose sends blow up inside the handler
struct PanickingMessaging;

#[async_trait]
impl MessagingProvider for PanickingMessaging {
    async fn send_text(&self, _reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        panic!("kaboom")
    }

    async fn send_media(&self, _reply: &OutboundReply) -> Result<SendReceipt, DomainError> {
        panic!("kaboom")
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

struct MockCompletion {
    result: Result<String, CompletionError>,
    calls: AtomicUsize,
    last_user_message: Mutex<Option<String>>,
}

impl MockCompletion {
    fn returning(result: Result<String, CompletionError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_user_message: Mutex::new(None),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_message.lock().unwrap() = messages.last().map(|m| m.content.clone());
        self.result.clone()
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

struct TestApp {
    router: axum::Router,
    messaging: Arc<MockMessaging>,
    completion: Arc<MockCompletion>,
}

impl TestApp {
    fn new(messaging: MockMessaging, completion: MockCompletion) -> Self {
        let messaging = Arc::new(messaging);
        let completion = Arc::new(completion);
        let relay = RelayService::new(messaging.clone(), completion.clone(), relay_settings());
        Self {
            router: build_router(AppState::new(relay)),
            messaging,
            completion,
        }
    }

    fn healthy(reply: &str) -> Self {
        Self::new(
            MockMessaging::default(),
            MockCompletion::returning(Ok(reply.to_string())),
        )
    }

    async fn post_form(&self, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/whatsapp-webhook")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    fn completion_calls(&self) -> usize {
        self.completion.calls.load(Ordering::SeqCst)
    }

    fn outbound_count(&self) -> usize {
        self.messaging.texts.lock().unwrap().len() + self.messaging.media.lock().unwrap().len()
    }
}

fn relay_settings() -> RelaySettings {
    RelaySettings {
        profile: AssistantProfile::new("Gourmet Delight"),
        menu_url: MENU_URL.to_string(),
        keywords: KeywordSet::from_csv("menu,pdf,cardápio"),
        completion: CompletionOptions::default(),
    }
}

async fn body_to_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let app = TestApp::healthy("unused");

    let resp = app
        .post_form("Body=&From=whatsapp%3A%2B5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(resp).await;
    assert_eq!(json, serde_json::json!({"error": "Missing Body or From"}));
    assert_eq!(app.outbound_count(), 0);
    assert_eq!(app.completion_calls(), 0);
}

#[tokio::test]
async fn test_missing_from_is_bad_request() {
    let app = TestApp::healthy("unused");

    let resp = app.post_form("Body=hello").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.outbound_count(), 0);
    assert_eq!(app.completion_calls(), 0);
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    let app = TestApp::healthy("unused");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/whatsapp-webhook")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"Body":"menu"}"#))
        .unwrap();
    let resp = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.outbound_count(), 0);
}

// ============================================================================
// Menu path
// ============================================================================

#[tokio::test]
async fn test_menu_request_sends_document() {
    let app = TestApp::healthy("unused");

    let resp = app
        .post_form("Body=Can+I+see+the+menu%3F&From=whatsapp%3A5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_to_json(resp).await, serde_json::json!({"success": true}));

    let media = app.messaging.media.lock().unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].recipient.as_str(), "whatsapp:+5511999999999");
    assert_eq!(media[0].media_url.as_deref(), Some(MENU_URL));
    assert_eq!(
        media[0].body.as_deref(),
        Some("Here's the menu for Gourmet Delight! 🍽️")
    );
    assert!(app.messaging.texts.lock().unwrap().is_empty());
    assert_eq!(app.completion_calls(), 0);
}

#[tokio::test]
async fn test_keywords_match_case_insensitively() {
    for body in ["MENU", "Send+the+PDF+please", "Qual+%C3%A9+o+CARD%C3%81PIO"] {
        let app = TestApp::healthy("unused");
        let resp = app
            .post_form(&format!("Body={body}&From=whatsapp%3A%2B5511"))
            .await;

        assert_eq!(resp.status(), StatusCode::OK, "body {body}");
        assert_eq!(app.messaging.media.lock().unwrap().len(), 1, "body {body}");
        assert_eq!(app.completion_calls(), 0, "body {body}");
    }
}

#[tokio::test]
async fn test_media_send_failure_is_server_error() {
    let app = TestApp::new(
        MockMessaging::failing("HTTP 400 error: Media URL is unreachable"),
        MockCompletion::returning(Ok("unused".into())),
    );

    let resp = app
        .post_form("Body=menu&From=whatsapp%3A5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_to_json(resp).await,
        serde_json::json!({"error": "HTTP 400 error: Media URL is unreachable"})
    );
    // no fall-through to the question path
    assert_eq!(app.completion_calls(), 0);
    assert!(app.messaging.texts.lock().unwrap().is_empty());
}

// ============================================================================
// Question path
// ============================================================================

#[tokio::test]
async fn test_question_sends_completion_text() {
    let app = TestApp::healthy("We're open 9-5.");

    let resp = app
        .post_form("Body=What+are+your+hours%3F&From=whatsapp%3A5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.completion_calls(), 1);
    assert_eq!(
        app.completion.last_user_message.lock().unwrap().as_deref(),
        Some("what are your hours?")
    );

    let texts = app.messaging.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].body.as_deref(), Some("We're open 9-5."));
    assert_eq!(texts[0].recipient.as_str(), "whatsapp:+5511999999999");
    assert!(app.messaging.media.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_completion_failure_still_replies() {
    let app = TestApp::new(
        MockMessaging::default(),
        MockCompletion::returning(Err(CompletionError::Api {
            status: 500,
            message: "The server had an error".into(),
        })),
    );

    let resp = app
        .post_form("Body=What+are+your+hours%3F&From=whatsapp%3A5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_to_json(resp).await, serde_json::json!({"success": true}));

    let texts = app.messaging.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    let sent = texts[0].body.as_deref().unwrap();
    assert!(sent.starts_with("⚠️ Error: "), "unexpected fallback: {sent}");
    assert!(sent.contains("The server had an error"));
}

#[tokio::test]
async fn test_text_send_failure_is_server_error() {
    let app = TestApp::new(
        MockMessaging::failing("HTTP 401 error: Authenticate"),
        MockCompletion::returning(Ok("hi".into())),
    );

    let resp = app
        .post_form("Body=hello&From=whatsapp%3A5511999999999")
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_to_json(resp).await,
        serde_json::json!({"error": "HTTP 401 error: Authenticate"})
    );
    assert_eq!(app.completion_calls(), 1);
}

// ============================================================================
// Uncaught failures
// ============================================================================

#[tokio::test]
async fn test_handler_panic_is_server_error() {
    let completion = Arc::new(MockCompletion::returning(Ok("unused".into())));
    let relay = RelayService::new(Arc::new(PanickingMessaging), completion, relay_settings());
    let router = build_router(AppState::new(relay));

    for body in ["Body=menu&From=whatsapp%3A5511", "Body=hello&From=whatsapp%3A5511"] {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/whatsapp-webhook")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let resp = router.clone().oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
        assert_eq!(
            body_to_json(resp).await,
            serde_json::json!({"error": "kaboom"})
        );
    }
}

// ============================================================================
// Ancillary routes
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = TestApp::healthy("unused");

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_to_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = TestApp::healthy("unused");

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_to_json(resp).await;
    assert!(json["paths"]["/whatsapp-webhook"]["post"].is_object());
}
