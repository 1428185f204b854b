//! Account inspection HTTP handlers.
//!
//! This module implements the read-only account endpoints:
//! - GET /accounts - List all accounts
//! - GET /accounts/{name} - Get one account by name

use crate::{error::AppError, models::account::AccountResponse, services::registry::SharedRegistry};
use axum::{
    Json,
    extract::{Path, State},
};

/// Get a specific account by name.
///
/// # URL Parameters
///
/// - `name` - Account name, case-insensitive
///
/// # Response
///
/// - **Success (200 OK)**: `{ "name": "Mark", "balance": 100 }`
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(registry): State<SharedRegistry>,
    Path(name): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = registry.snapshot(&name).ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}

/// List all accounts.
///
/// # Ordering
///
/// Accounts are returned sorted by lowercased name.
pub async fn list_accounts(State(registry): State<SharedRegistry>) -> Json<Vec<AccountResponse>> {
    Json(registry.snapshots())
}
