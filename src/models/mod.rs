//! Data models for accounts and transfers.
//!
//! This module contains the in-memory entities and the request/response
//! shapes exchanged with clients.

/// Account entity and account-file record
pub mod account;
/// Transfer request and response
pub mod transfer;
