//! Budget Token Distributor - token-settled sibling of the CSPR distributor
//!
//! Funds arrive as CEP-18 transfers to the contract's address and the budget
//! is derived from the live token balance. Only the shape is in place:
//! assign/reverse/release settlement against the token is not implemented yet.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use super::errors::DistributorError;
use crate::token::Cep18TokenContractRef;

/// Token-settled budget distributor contract
#[odra::module]
pub struct BudgetTokenDistributor {
    /// CEP-18 token the budget is denominated in
    token: Var<Address>,
    /// Contract owner
    owner: Var<Address>,
    /// Manager for earmark operations
    manager: Var<Address>,
    /// Whether manager operations are paused
    paused: Var<bool>,
    /// Total rewards currently earmarked
    rewards_assigned: Var<U256>,
    /// Running total of rewards paid out
    rewards_released: Var<U256>,
    /// Earmarked rewards per contributor
    rewards_of: Mapping<Address, U256>,
}

#[odra::module]
impl BudgetTokenDistributor {
    /// Initialize the distributor with its funding token
    pub fn init(&mut self, token_address: Address) {
        let caller = self.env().caller();
        self.token.set(token_address);
        self.owner.set(caller);
        self.manager.set(caller);
        self.paused.set(false);
        self.rewards_assigned.set(U256::zero());
        self.rewards_released.set(U256::zero());
    }

    /// Get the funding token address
    pub fn token(&self) -> Address {
        self.token.get_or_revert_with(DistributorError::InvalidAddress)
    }

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

    /// Get the unassigned portion of the held token balance
    pub fn available_budget(&self) -> U256 {
        let token_address = self.token();
        let token = Cep18TokenContractRef::new(self.env(), token_address);
        let balance = token.balance_of(Address::from(self.env().self_address()));
        let assigned = self.rewards_assigned.get_or_default();
        balance - assigned
    }

    /// Get the total rewards currently earmarked
    pub fn rewards_assigned(&self) -> U256 {
        self.rewards_assigned.get_or_default()
    }

    /// Get the running total of rewards paid out
    pub fn rewards_released(&self) -> U256 {
        self.rewards_released.get_or_default()
    }

    /// Get the rewards currently earmarked for a contributor
    pub fn rewards_of(&self, contributor: Address) -> U256 {
        self.rewards_of.get(&contributor).unwrap_or_default()
    }
}
