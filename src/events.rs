//! Event definitions shared by the token and treasury contracts
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when tokens are transferred
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

/// Event emitted when a contract is paused
#[odra::event]
pub struct Paused {
    /// Account that triggered the pause
    pub account: Address,
}

/// Event emitted when a contract is unpaused
#[odra::event]
pub struct Unpaused {
    /// Account that lifted the pause
    pub account: Address,
}
