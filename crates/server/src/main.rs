use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vodhound_core::{
    load_config, load_index, validate_config, CatalogService, CursorStore, ProgressStore,
    SqliteCursorStore, SqliteProgressStore,
};

use vodhound_server::api::create_router;
use vodhound_server::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("VODHOUND_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully (version {})", VERSION);
    info!("Database path: {:?}", config.database.path);
    info!("Catalog feed: {:?}", config.catalog.path);

    // Compute config hash so deployments are identifiable in logs
    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!("Config hash: {}", &config_hash[..16]);

    // Load the catalog snapshot. A reload requires a process restart.
    let index = Arc::new(
        load_index(&config.catalog.path)
            .with_context(|| format!("Failed to load catalog feed {:?}", config.catalog.path))?,
    );
    info!(
        "Catalog loaded: {} videos, {} categories",
        index.len(),
        index.categories().len()
    );

    // Durable stores for pagination cursors and playback progress
    let cursor_store: Arc<dyn CursorStore> = Arc::new(
        SqliteCursorStore::new(&config.database.path).context("Failed to create cursor store")?,
    );
    let progress_store: Arc<dyn ProgressStore> = Arc::new(
        SqliteProgressStore::new(&config.database.path)
            .context("Failed to create progress store")?,
    );
    info!("Cursor and progress stores initialized");

    let service = Arc::new(
        CatalogService::new(index, cursor_store).with_progress_store(progress_store),
    );

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), service));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
