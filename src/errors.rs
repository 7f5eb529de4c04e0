//! Error definitions for the pausable token contract
use odra::prelude::*;

/// Custom errors for the token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Caller is not the token owner
    NotOwner = 102,

    /// Transfers are paused
    TransfersPaused = 103,
}
