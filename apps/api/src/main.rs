mod config;
mod errors;
mod interview;
mod llm_client;
mod render;
mod resume;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::orchestrator::InterviewOrchestrator;
use crate::interview::session::SessionStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing API key stops the process here.
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Coach v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let orchestrator = InterviewOrchestrator::new(Arc::new(llm))
        .reject_empty_responses(config.reject_empty_responses);
    if config.reject_empty_responses {
        info!("Empty candidate responses will be rejected");
    }

    // Idle sessions are swept in the background as well as on insert
    let sessions = SessionStore::new(config.session_idle_ttl);
    sessions.spawn_sweeper(SESSION_SWEEP_INTERVAL);
    info!("Session idle TTL: {}s", config.session_idle_ttl.as_secs());

    // Build app state
    let state = AppState {
        sessions,
        orchestrator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
