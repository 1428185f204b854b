//! Transfer service - Core business logic for moving money between accounts.
//!
//! This service handles:
//! - Request validation (see `services::validation`)
//! - Deadlock-free acquisition of both account guards
//! - Balance re-check under the guards
//! - The atomic debit + credit
//!
//! # Atomicity Guarantees
//!
//! The debit and the credit happen while both account guards are held, so
//! no observer can see a balance in a half-transferred state. Every guard is
//! an RAII `MutexGuard` and is released on every exit path.
//!
//! # Lock Ordering
//!
//! When two guards are needed they are always taken in ascending order of
//! normalized identity, whichever side is sender or receiver. Every transfer
//! agrees on that single total order, which rules out circular waits.

use crate::{
    error::TransferError,
    models::{
        account::Account,
        transfer::{TRANSFER_SUCCESS_MESSAGE, TransferRequest, TransferResponse},
    },
    services::{registry::AccountRegistry, validation},
};
use std::sync::{Arc, MutexGuard};

/// Execute a transfer (move `amount` from `request.from` to `request.to`).
///
/// # Process
///
/// 1. Validate the request (no guards taken)
/// 2. Resolve both accounts; the registry lock is released here
/// 3. Fast-fail if the sender is already short of funds
/// 4. Lock both accounts in identity order
/// 5. Re-check funds under the guards
/// 6. Debit the sender and credit the receiver
/// 7. Snapshot both balances and release the guards
///
/// # Errors
///
/// - `SameAccount`, `NonPositiveAmount`, `SenderNotFound`, `ReceiverNotFound`:
///   from validation, nothing is locked or mutated
/// - `InsufficientFunds`: sender balance is below `amount`, nothing is mutated
/// - `BalanceOverflow`: receiver balance cannot hold the credit, nothing is mutated
pub fn execute_transfer(
    registry: &AccountRegistry,
    request: TransferRequest,
) -> Result<TransferResponse, TransferError> {
    let transfer = validation::validate(&request, registry)?;

    // Accounts are never removed after load, so these lookups cannot miss
    // once validation has passed.
    let sender = registry
        .lookup(&transfer.from)
        .ok_or(TransferError::SenderNotFound)?;
    let receiver = registry
        .lookup(&transfer.to)
        .ok_or(TransferError::ReceiverNotFound)?;

    // Loose check without holding both guards. The authoritative one is below.
    if sender.balance() < transfer.amount {
        return Err(TransferError::InsufficientFunds);
    }

    let (mut sender_balance, mut receiver_balance) = lock_pair(&sender, &receiver);
    settle(&mut sender_balance, &mut receiver_balance, transfer.amount)?;

    Ok(TransferResponse {
        from: sender.name().to_string(),
        from_balance: *sender_balance,
        to: receiver.name().to_string(),
        to_balance: *receiver_balance,
        message: TRANSFER_SUCCESS_MESSAGE.to_string(),
    })
}

/// Re-check funds and move `amount`, with both guards already held.
///
/// Balances are left untouched on error.
fn settle(sender: &mut i64, receiver: &mut i64, amount: i64) -> Result<(), TransferError> {
    if *sender < amount {
        return Err(TransferError::InsufficientFunds);
    }

    let credited = receiver
        .checked_add(amount)
        .ok_or(TransferError::BalanceOverflow)?;

    *sender -= amount;
    *receiver = credited;
    Ok(())
}

/// Lock `sender` and `receiver` in ascending identity order.
///
/// Returns the guards as `(sender, receiver)` regardless of which one was
/// acquired first.
fn lock_pair<'a>(
    sender: &'a Arc<Account>,
    receiver: &'a Arc<Account>,
) -> (MutexGuard<'a, i64>, MutexGuard<'a, i64>) {
    if sender.identity() < receiver.identity() {
        let sender_guard = sender.lock();
        let receiver_guard = receiver.lock();
        (sender_guard, receiver_guard)
    } else {
        let receiver_guard = receiver.lock();
        let sender_guard = sender.lock();
        (sender_guard, receiver_guard)
    }
}
