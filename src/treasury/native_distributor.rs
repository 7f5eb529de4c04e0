//! Budget CSPR Distributor - native-value treasury for contributor rewards
//!
//! The contract pools CSPR sent to it, lets the manager earmark portions of
//! the pool for contributors, reverse those earmarks, or pay them out, and
//! lets the owner withdraw whatever is not earmarked. The contract balance is
//! the ground truth for held funds; only the earmark counters live in storage.

use odra::prelude::*;
use odra::casper_types::U512;
use super::errors::DistributorError;
use super::events::*;
use crate::events::{Paused, Unpaused};

/// Native-value budget distributor contract
#[odra::module]
pub struct BudgetCsprDistributor {
    /// Contract owner, allowed to replace the manager, pause, and withdraw
    owner: Var<Address>,
    /// Manager, allowed to assign, reverse, and release rewards
    manager: Var<Address>,
    /// Whether manager operations are paused
    paused: Var<bool>,
    /// Total rewards currently earmarked but not yet released or reversed
    rewards_assigned: Var<U512>,
    /// Running total of rewards ever paid out
    rewards_released: Var<U512>,
    /// Earmarked rewards per contributor
    rewards_of: Mapping<Address, U512>,
}

#[odra::module]
impl BudgetCsprDistributor {
    /// Initialize the distributor with the deployer as both owner and manager
    pub fn init(&mut self) {
        let caller = self.env().caller();
        self.owner.set(caller);
        self.manager.set(caller);
        self.paused.set(false);
        self.rewards_assigned.set(U512::zero());
        self.rewards_released.set(U512::zero());
    }

    /// Accept CSPR into the rewards budget
    ///
    /// The attached value credits the contract balance; no bookkeeping is
    /// needed since the budget is derived from the balance on read.
    #[odra(payable)]
    pub fn deposit(&mut self) {}

    // ========================================
    // Owner Functions
    // ========================================

    /// Assign a new manager
    pub fn assign_manager(&mut self, new_manager: Address) {
        self.only_owner();
        if is_null_address(&new_manager) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        self.manager.set(new_manager);
    }

    /// Pause manager operations
    ///
    /// Re-asserting an existing pause is allowed and still emits the event.
    pub fn pause(&mut self) {
        self.only_owner();
        self.paused.set(true);
        let account = self.env().caller();
        self.env().emit_event(Paused { account });
    }

    /// Resume manager operations
    pub fn unpause(&mut self) {
        self.only_owner();
        self.paused.set(false);
        let account = self.env().caller();
        self.env().emit_event(Unpaused { account });
    }

    /// Withdraw the entire unassigned budget to `to`
    ///
    /// Not gated by pause: the owner can always drain unassigned funds.
    /// Earmarked rewards are never touched.
    pub fn withdraw(&mut self, to: Address) {
        self.only_owner();

        let amount = self.available_budget();
        if amount == U512::zero() {
            self.env().revert(DistributorError::NothingToWithdraw);
        }

        self.env().transfer_tokens(&to, &amount);

        self.env().emit_event(BudgetWithdrawn { to, amount });
    }

    // ========================================
    // Manager Functions
    // ========================================

    /// Earmark `amount` of the available budget for `contributor`
    ///
    /// Repeated assignments to the same contributor accumulate.
    pub fn assign(&mut self, contributor: Address, amount: U512) {
        self.ensure_not_paused();
        self.only_manager();
        self.ensure_valid_contributor(&contributor);

        if amount == U512::zero() || amount > self.available_budget() {
            self.env().revert(DistributorError::InvalidAmount);
        }

        let current = self.rewards_of.get(&contributor).unwrap_or_default();
        self.rewards_of.set(&contributor, current + amount);

        let assigned = self.rewards_assigned.get_or_default();
        self.rewards_assigned.set(assigned + amount);

        self.env().emit_event(RewardsAssigned {
            contributor,
            amount,
        });
    }

    /// Undo up to `amount` of a contributor's earmark
    ///
    /// The balance is unchanged; the funds return to the available budget.
    pub fn reverse(&mut self, contributor: Address, amount: U512) {
        self.ensure_not_paused();
        self.only_manager();
        self.ensure_valid_contributor(&contributor);

        let current = self.rewards_of.get(&contributor).unwrap_or_default();
        if amount == U512::zero() || amount > current {
            self.env().revert(DistributorError::InvalidAmount);
        }

        self.rewards_of.set(&contributor, current - amount);

        let assigned = self.rewards_assigned.get_or_default();
        self.rewards_assigned.set(assigned - amount);

        self.env().emit_event(RewardsReversed {
            contributor,
            amount,
        });
    }

    /// Pay out up to `amount` of a contributor's earmark
    ///
    /// Bookkeeping and the outbound transfer commit atomically: a failed
    /// transfer reverts the whole call.
    pub fn release(&mut self, contributor: Address, amount: U512) {
        self.ensure_not_paused();
        self.only_manager();
        self.ensure_valid_contributor(&contributor);

        let current = self.rewards_of.get(&contributor).unwrap_or_default();
        if amount == U512::zero() || amount > current {
            self.env().revert(DistributorError::InvalidAmount);
        }

        self.rewards_of.set(&contributor, current - amount);

        let assigned = self.rewards_assigned.get_or_default();
        self.rewards_assigned.set(assigned - amount);

        let released = self.rewards_released.get_or_default();
        self.rewards_released.set(released + amount);

        self.env().transfer_tokens(&contributor, &amount);

        self.env().emit_event(RewardsReleased {
            contributor,
            amount,
        });
    }

    // ========================================
    // View Functions
    // ========================================

    /// Get the contract owner
    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(DistributorError::NotOwner)
    }

    /// Get the assigned manager
    pub fn manager(&self) -> Address {
        self.manager.get_or_revert_with(DistributorError::NotManager)
    }

    /// Whether manager operations are paused
    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    /// Get the unassigned portion of the held funds
    pub fn available_budget(&self) -> U512 {
        let balance = self.env().self_balance();
        let assigned = self.rewards_assigned.get_or_default();
        balance - assigned
    }

    /// Get the total rewards currently earmarked
    pub fn rewards_assigned(&self) -> U512 {
        self.rewards_assigned.get_or_default()
    }

    /// Get the running total of rewards paid out
    pub fn rewards_released(&self) -> U512 {
        self.rewards_released.get_or_default()
    }

    /// Get the rewards currently earmarked for a contributor
    pub fn rewards_of(&self, contributor: Address) -> U512 {
        self.rewards_of.get(&contributor).unwrap_or_default()
    }

    // ========================================
    // Internal Functions
    // ========================================

    fn only_owner(&self) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(DistributorError::NotOwner);
        if caller != owner {
            self.env().revert(DistributorError::NotOwner);
        }
    }

    fn only_manager(&self) {
        let caller = self.env().caller();
        let manager = self.manager.get_or_revert_with(DistributorError::NotManager);
        if caller != manager {
            self.env().revert(DistributorError::NotManager);
        }
    }

    fn ensure_not_paused(&self) {
        if self.paused.get_or_default() {
            self.env().revert(DistributorError::ContractPaused);
        }
    }

    fn ensure_valid_contributor(&self, contributor: &Address) {
        if is_null_address(contributor) {
            self.env().revert(DistributorError::InvalidAddress);
        }
    }
}

/// Whether an address is the all-zero account or contract hash
fn is_null_address(address: &Address) -> bool {
    match address {
        Address::Account(account) => account.value() == [0u8; 32],
        Address::Contract(contract) => contract.value() == [0u8; 32],
    }
}
