mod error;
mod handlers;

pub use error::ApiError;

use crate::config::ServerConfig;
use crate::receipts::ReceiptStore;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: ReceiptStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the HTTP router for the receipt API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind the listener and serve until Ctrl-C.
pub async fn run(config: &ServerConfig, state: AppState) -> Result<()> {
    let address = SocketAddr::new(config.address, config.port);
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    let local = listener.local_addr()?;

    tracing::info!(address = %local, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
