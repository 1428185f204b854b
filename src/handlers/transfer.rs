//! Transfer HTTP handler.
//!
//! - POST /transfer - Move money between two accounts

use crate::{
    error::AppError,
    models::transfer::{TransferRequest, TransferResponse},
    services::{registry::SharedRegistry, transfer_service},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// Transfer money between accounts.
///
/// # Request Body
///
/// ```json
/// { "from": "Mark", "to": "Jane", "amount": 30 }
/// ```
///
/// # Response (200)
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
///
/// # Errors
///
/// - 400 `invalid_request` if the body is not a valid transfer request
/// - 400 with the transfer error code for any rejected transfer
pub async fn create_transfer(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected transfer body");
        AppError::InvalidRequest("Invalid request".to_string())
    })?;

    let (from, to, amount) = (request.from.clone(), request.to.clone(), request.amount);

    // The engine never awaits while holding a guard, so it runs inline.
    match transfer_service::execute_transfer(&registry, request) {
        Ok(response) => {
            tracing::info!(
                from = %response.from,
                to = %response.to,
                amount,
                from_balance = response.from_balance,
                to_balance = response.to_balance,
                "transfer completed"
            );
            Ok(Json(response))
        }
        Err(err) => {
            tracing::warn!(%from, %to, amount, error = %err, "transfer rejected");
            Err(err.into())
        }
    }
}
