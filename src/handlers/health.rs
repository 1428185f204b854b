//! Health check endpoint for service monitoring.

use crate::services::registry::SharedRegistry;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of loaded accounts
    pub accounts: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(registry): State<SharedRegistry>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        accounts: registry.len(),
        timestamp: Utc::now(),
    })
}
