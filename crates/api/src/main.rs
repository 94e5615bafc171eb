mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod storage_http;

use std::sync::Arc;

use pageflow_core::events::bus::EventBus;
use pageflow_core::storage::{LocalPreviewStore, MaterialStore};
use pageflow_review::engine::{DesignReviewEngine, PartialPolicy, ReviewPolicy};
use pageflow_review::rubric::BuiltinRubrics;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting pageflow API server");

    // Select the storage variant once, at construction
    let store: Arc<dyn MaterialStore> = match &config.storage {
        Some(settings) => {
            tracing::info!(base_url = %settings.base_url, "using configured object store");
            Arc::new(storage_http::HttpObjectStore::new(settings))
        }
        None => {
            tracing::info!("no object store configured, using local preview store");
            Arc::new(LocalPreviewStore::new())
        }
    };

    // Review engine with the built-in deterministic rubrics
    let engine = DesignReviewEngine::new(
        Arc::new(BuiltinRubrics),
        ReviewPolicy {
            rubric_timeout: config.rubric_timeout,
            on_partial: PartialPolicy::Downgrade,
        },
    );

    // Create event bus
    let event_bus = EventBus::new(config.event_bus_capacity);

    // Build application state
    let state = state::AppState::new(config.clone(), engine, event_bus, store);

    // Build router with middleware
    let app = routes::build_router(state)
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer());

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
