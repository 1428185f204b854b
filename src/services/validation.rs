//! Transfer request validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. Normalize `from` and `to`
//! 2. Same account
//! 3. Non-positive amount
//! 4. Sender exists
//! 5. Receiver exists
//!
//! The structural checks come before the registry lookups, so a malformed
//! request never touches the registry lock.

use crate::{
    error::TransferError,
    models::{account::normalize_identity, transfer::TransferRequest},
    services::registry::AccountRegistry,
};

/// A request that passed validation, with lowercased identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

/// Validate `request` against `registry` without locking any account.
pub fn validate(
    request: &TransferRequest,
    registry: &AccountRegistry,
) -> Result<ValidatedTransfer, TransferError> {
    let from = normalize_identity(&request.from);
    let to = normalize_identity(&request.to);

    if from == to {
        return Err(TransferError::SameAccount);
    }

    if request.amount <= 0 {
        return Err(TransferError::NonPositiveAmount);
    }

    if !registry.contains(&from) {
        return Err(TransferError::SenderNotFound);
    }

    if !registry.contains(&to) {
        return Err(TransferError::ReceiverNotFound);
    }

    Ok(ValidatedTransfer {
        from,
        to,
        amount: request.amount,
    })
}
