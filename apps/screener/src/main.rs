mod config;
mod errors;
mod extraction;
mod knowledge;
mod llm_client;
mod models;
mod qa;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::knowledge::{EmbeddingClient, TextSplitter};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

/// Generation calls on long resumes can take a while.
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    let http = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    // Initialize generation client
    let llm = LlmClient::new(
        http.clone(),
        config.llm_api_url.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize embedding client
    let embedder = EmbeddingClient::new(
        http,
        config.embedding_api_url.clone(),
        config.embedding_api_key.clone(),
        config.embedding_model.clone(),
    );
    info!("Embedding client initialized (model: {})", embedder.model());

    info!(
        "Tenure reference date: {}",
        config.tenure_reference_date.format("%B %Y")
    );

    // Evict idle sessions in the background
    let sessions = SessionStore::default();
    let _eviction = sessions.spawn_eviction(
        chrono::Duration::minutes(config.session_ttl_minutes),
        SESSION_SWEEP_INTERVAL,
    );
    info!("Session TTL: {} minutes", config.session_ttl_minutes);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        embedder: Arc::new(embedder),
        sessions,
        splitter: TextSplitter::default(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once a web client is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
