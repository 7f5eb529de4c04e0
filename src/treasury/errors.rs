//! Error types for the budget distributors

use odra::prelude::*;

#[odra::odra_error]
pub enum DistributorError {
    /// Caller is not the contract owner
    NotOwner = 1,
    /// Caller is not the assigned manager
    NotManager = 2,
    /// Contract paused
    ContractPaused = 3,
    /// Null address passed where a real identity is required
    InvalidAddress = 4,
    /// Amount is zero or exceeds the relevant bound
    InvalidAmount = 5,
    /// No withdrawable balance
    NothingToWithdraw = 6,
    /// Outbound transfer failed
    TransferFailed = 7,
}
