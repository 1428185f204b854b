//! Transfer Service - Main Application Entry Point
//!
//! A REST API server that moves money between named in-memory accounts.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory registry with one mutex per account
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Load accounts from the accounts file
//! 3. Build HTTP router
//! 4. Start server on configured port

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use transfer_service::{config::Config, loader, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(accounts_file = %config.accounts_file.display(), "Configuration loaded");

    // Accounts are loaded fully before the listener is bound, so no request
    // can race the load.
    let registry = Arc::new(loader::load_registry(&config.accounts_file)?);
    tracing::info!(
        accounts = registry.len(),
        total_balance = %registry.total_balance(),
        "Accounts loaded"
    );

    let app = router(registry);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
