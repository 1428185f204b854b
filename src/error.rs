//! Error types and HTTP error response handling.
//!
//! This module defines the transfer errors produced by the core and how
//! application errors are converted into HTTP responses with appropriate
//! status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Reasons a transfer can be rejected.
///
/// The messages are part of the public contract and are surfaced to clients
/// verbatim. Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("cannot transfer to the same account")]
    SameAccount,

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("sender account does not exist")]
    SenderNotFound,

    #[error("receiver account does not exist")]
    ReceiverNotFound,

    /// Sender balance is below the amount once both guards are held.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Crediting the receiver would overflow its `i64` balance.
    #[error("receiver balance would overflow")]
    BalanceOverflow,
}

impl TransferError {
    /// Machine-readable code used in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::SameAccount => "same_account",
            TransferError::NonPositiveAmount => "invalid_amount",
            TransferError::SenderNotFound => "sender_not_found",
            TransferError::ReceiverNotFound => "receiver_not_found",
            TransferError::InsufficientFunds => "insufficient_funds",
            TransferError::BalanceOverflow => "balance_overflow",
        }
    }
}

/// Errors raised while seeding the registry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read accounts file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse accounts file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Balances must start non-negative.
    #[error("account {name} has a negative balance: {balance}")]
    NegativeBalance { name: String, balance: i64 },
}

/// Application-wide error type for the HTTP layer.
///
/// # Error Categories
///
/// - **Transfer Errors**: Any rejection from the transfer service
/// - **Resource Errors**: Requested account not found
/// - **Validation Errors**: Malformed request body
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transfer was rejected by validation or by the funds check.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Request body could not be decoded.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String is the message shown to the client.
    #[error("{0}")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "insufficient_funds",
///     "message": "insufficient funds"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Transfer(_)` → 400 Bad Request
/// - `AccountNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Transfer(ref err) => {
                (StatusCode::BAD_REQUEST, err.code(), err.to_string())
            }
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
