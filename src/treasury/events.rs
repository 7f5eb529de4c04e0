//! Events for the budget distributors

use odra::prelude::*;
use odra::casper_types::U512;

/// Event emitted when rewards are earmarked for a contributor
#[odra::event]
pub struct RewardsAssigned {
    pub contributor: Address,
    pub amount: U512,
}

/// Event emitted when an earmark is returned to the available budget
#[odra::event]
pub struct RewardsReversed {
    pub contributor: Address,
    pub amount: U512,
}

/// Event emitted when an earmark is paid out to a contributor
#[odra::event]
pub struct RewardsReleased {
    pub contributor: Address,
    pub amount: U512,
}

/// Event emitted when the owner drains the unassigned budget
#[odra::event]
pub struct BudgetWithdrawn {
    pub to: Address,
    pub amount: U512,
}
