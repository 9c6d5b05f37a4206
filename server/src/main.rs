//! WiseTools Hub host server: Leptos SSR, static assets, and the AI proxy.

mod ai;
mod config;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use crate::ai::gemini::GeminiClient;
use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;

    let gemini = GeminiClient::new(&config.ai).map_err(|e| e.to_string())?;
    if gemini.is_configured() {
        tracing::info!(model = gemini.model(), "AI client initialized");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; AI tools will reply with a configuration notice");
    }

    if config.trust_proxy {
        tracing::info!("rate limiting keyed on X-Forwarded-For");
    }
    let state = state::AppState::new(Arc::new(gemini), RateLimiter::new(config.rate_limit))
        .trusting_forwarded_for(config.trust_proxy);
    let app = routes::leptos_app(state)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("bind port {port}: {e}"))?;

    tracing::info!(%port, "wisetools listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .map_err(|e| format!("serve: {e}"))
}
