use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use menubot_integration_twilio::TwilioIntegration;
use menubot_server::adapters::OpenAiProvider;
use menubot_server::application::RelayService;
use menubot_server::config::AppConfig;
use menubot_server::{build_router, AppState};

const DEFAULT_LOG_FILTER: &str =
    "info,menubot=debug,menubot_server=debug,menubot_integration_twilio=debug";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️  Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("🍽️  Menubot initializing...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let twilio =
        TwilioIntegration::new(config.twilio.clone()).context("Failed to build Twilio client")?;
    tracing::info!("📱 Twilio client ready (from {})", config.twilio.from);

    let openai =
        OpenAiProvider::new(config.openai.clone()).context("Failed to build OpenAI client")?;
    tracing::info!("🤖 OpenAI provider ready (model {})", config.model);

    let relay = RelayService::new(Arc::new(twilio), Arc::new(openai), config.relay_settings());
    tracing::info!(
        "📋 Serving {} - menu keywords: {}",
        config.profile.business_name,
        config.keywords.keywords().join(", ")
    );

    let router = build_router(AppState::new(relay));

    let listener = tokio::net::TcpListener::bind((config.bind_address.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.bind_address, config.port))?;

    tracing::info!("✅ Menubot ready on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
