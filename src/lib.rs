//! # Transfer Service
//!
//! An in-memory engine that holds named accounts and moves money between them
//! safely under concurrent access, plus a small HTTP surface around it.
//!
//! ## Core Components
//!
//! - [`AccountRegistry`]: Accounts keyed by lowercased name, behind a read/write lock
//! - [`services::validation`]: Ordered, side-effect free request checks
//! - [`services::transfer_service`]: Lock-ordered debit + credit between two accounts
//! - [`TransferError`]: Every way a transfer can be rejected
//!
//! ## Example
//!
//! ```
//! use transfer_service::{AccountRegistry, execute_transfer};
//! use transfer_service::models::{account::AccountRecord, transfer::TransferRequest};
//!
//! let registry = AccountRegistry::with_accounts([
//!     AccountRecord::new("Mark", 100),
//!     AccountRecord::new("Jane", 50),
//! ])
//! .unwrap();
//!
//! let response = execute_transfer(&registry, TransferRequest::new("Mark", "jane", 30)).unwrap();
//! assert_eq!(response.from_balance, 70);
//! assert_eq!(response.to_balance, 80);
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod services;

pub use error::{AppError, LoadError, TransferError};
pub use services::registry::{AccountRegistry, SharedRegistry};
pub use services::transfer_service::execute_transfer;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the HTTP router around a shared registry.
pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/transfer", post(handlers::transfer::create_transfer))
        .route("/accounts", get(handlers::accounts::list_accounts))
        .route("/accounts/{name}", get(handlers::accounts::get_account))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the registry with all handlers via State extraction
        .with_state(registry)
}
