//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - API-key guard on /api routes
//! - Graceful shutdown on SIGTERM/Ctrl+C, then the store is closed

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{auth, docs, routes};
use crate::config::{ApiKey, ServerConfig};
use crate::db::{Store, StoreError};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(store: Store, api_key: ApiKey) -> Self {
        Self { store, api_key }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let state = Arc::new(state);

    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:8000"),
                HeaderValue::from_static("http://127.0.0.1:8000"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // route_layer: unknown /api paths fall through to 404 instead of 403
    let api = Router::new()
        .merge(routes::customers::router())
        .merge(routes::reservations::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(docs::swagger_ui())
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// Opens the store, applies migrations, serves until a shutdown signal,
/// then closes the store whether or not serving failed.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig::new(ApiKey::new("secret"));
/// run_server(config).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = Store::open(&config.database_url).await?;
    store.migrate().await?;

    let result = serve(store.clone(), &config).await;

    store.close().await;
    tracing::info!("Database connection closed");
    result
}

async fn serve(store: Store, config: &ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(store, config.api_key.clone());
    let app = build_router(state, config.cors_permissive);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
