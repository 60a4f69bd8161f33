//! Commerce error types.

use thiserror::Error;

/// Errors from money construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Currency mismatch between two amounts.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed decimal amount string.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// The single failure kind cart mutations can produce.
///
/// Only `add_item` rejects; every other cart operation is a total function
/// (missing ids are no-ops, out-of-range quantities are clamped or treated
/// as removal). The cart never produces user-facing text — callers decide
/// what, if anything, to render on rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Malformed input to `add_item`: non-positive quantity, empty id or
    /// title, negative or out-of-range price, currency mismatch, or a
    /// cart-capacity limit.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CartError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CartError::InvalidInput(reason.into())
    }
}
