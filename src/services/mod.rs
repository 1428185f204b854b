//! Business logic services.
//!
//! Services contain the core transfer engine, separated from HTTP handlers.
//! Nothing in here performs I/O or logging.

/// Account registry
pub mod registry;
/// Lock-ordered transfer execution
pub mod transfer_service;
/// Transfer request validation
pub mod validation;
