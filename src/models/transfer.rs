//! Transfer request/response types.
//!
//! These shapes are the stable contract between the transfer service and
//! its JSON surface.

use serde::{Deserialize, Serialize};

/// Message attached to every successful transfer.
pub const TRANSFER_SUCCESS_MESSAGE: &str = "Transfer successful";

/// Request to move money from one account to another.
///
/// # JSON Example
///
/// ```json
/// { "from": "Mark", "to": "Jane", "amount": 30 }
/// ```
///
/// Names are case-insensitive. Nothing is checked on construction; see
/// `services::validation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

impl TransferRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Post-transfer snapshot of both accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "from": "Mark",
///   "from_balance": 70,
///   "to": "Jane",
///   "to_balance": 80,
///   "message": "Transfer successful"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub from: String,
    pub from_balance: i64,
    pub to: String,
    pub to_balance: i64,
    pub message: String,
}
