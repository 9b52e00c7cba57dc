mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod session;
mod utils;
mod websocket;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::{DictionaryLookup, RemoteDictionary, WordListDictionary};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Bookkeeping for a connected player
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub connected_at: Instant,
}

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<dyn DictionaryLookup>,
    /// Live game sessions, one per websocket connection
    pub sessions: DashMap<Uuid, SessionInfo>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordup_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wordup backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let dictionary = load_dictionary(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary,
        sessions: DashMap::new(),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&config.server.frontend_dir);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Use the local word list when one is configured, otherwise the HTTP dictionary
async fn load_dictionary(config: &Config) -> Result<Arc<dyn DictionaryLookup>> {
    if let Some(path) = &config.game.dictionary_path {
        match WordListDictionary::load(path).await {
            Ok(dict) => {
                tracing::info!("Using word list dictionary from {}", path);
                return Ok(Arc::new(dict));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load dictionary: {}. Falling back to {}",
                    e,
                    config.game.dictionary_url
                );
            }
        }
    }

    let remote = RemoteDictionary::with_timeout(
        config.game.dictionary_url.clone(),
        Duration::from_secs(config.game.lookup_timeout_secs),
    )
    .context("failed to build dictionary HTTP client")?;
    tracing::info!("Using dictionary service at {}", config.game.dictionary_url);

    Ok(Arc::new(remote))
}
