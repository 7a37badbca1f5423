mod clues;
mod config;
mod errors;
mod llm_client;
mod puzzle;
mod routes;
mod state;
mod words;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clues::{ClueStore, InMemoryClueStore, RedisClueStore};
use crate::config::{ClueStoreBackend, Config};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lexigrid API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the clue store (in-memory by default — swap via CLUE_STORE)
    let ttl = Duration::minutes(config.clue_ttl_minutes);
    let clue_store: Arc<dyn ClueStore> = match &config.clue_store {
        ClueStoreBackend::Memory => {
            info!("Clue store: in-memory (ttl: {}m)", config.clue_ttl_minutes);
            Arc::new(InMemoryClueStore::new(ttl))
        }
        ClueStoreBackend::Redis(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Clue store: redis (ttl: {}m)", config.clue_ttl_minutes);
            Arc::new(RedisClueStore::new(client, ttl))
        }
    };

    // Initialize the LLM client when a key is configured; the word source
    // runs purely offline otherwise.
    let llm = config.anthropic_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => warn!("ANTHROPIC_API_KEY not set; topic word lists will use offline sets"),
    }

    // Build app state
    let state = AppState {
        llm,
        clue_store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: tighten CORS in production
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
