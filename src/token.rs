//! CEP-18 compatible token with owner-gated transfer pause
//! This token funds the token-settled budget distributor in tests and deployments
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Approval, Paused, Transfer, Unpaused};
use crate::errors::TokenError;

/// Pausable token module implementing the CEP-18 standard
#[odra::module]
pub struct PausableToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Token owner, allowed to pause transfers
    owner: Var<Address>,
    /// Whether transfers are paused
    paused: Var<bool>,
}

#[odra::module]
impl PausableToken {
    /// Initialize the token, allocating the full supply to the deployer
    pub fn init(&mut self, total_supply: U256) {
        let caller = self.env().caller();
        self.name.set(String::from("Pausable Token"));
        self.symbol.set(String::from("PAUSE"));
        self.decimals.set(18);
        self.total_supply.set(total_supply);
        self.balances.set(&caller, total_supply);
        self.owner.set(caller);
        self.paused.set(false);

        self.env().emit_event(Transfer {
            from: Address::from(self.env().self_address()),
            to: caller,
            value: total_supply,
        });
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the token owner
    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(TokenError::NotOwner)
    }

    /// Whether transfers are currently paused
    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.ensure_not_paused();
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.ensure_not_paused();
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Pause all token transfers
    pub fn pause(&mut self) {
        self.only_owner();
        self.paused.set(true);
        let account = self.env().caller();
        self.env().emit_event(Paused { account });
    }

    /// Resume token transfers
    pub fn unpause(&mut self) {
        self.only_owner();
        self.paused.set(false);
        let account = self.env().caller();
        self.env().emit_event(Unpaused { account });
    }

    /// Internal transfer function
    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    /// Internal approve function
    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }

    fn only_owner(&self) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(TokenError::NotOwner);
        if caller != owner {
            self.env().revert(TokenError::NotOwner);
        }
    }

    fn ensure_not_paused(&self) {
        if self.paused.get_or_default() {
            self.env().revert(TokenError::TransfersPaused);
        }
    }
}

/// External token interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    /// Get total supply
    fn total_supply(&self) -> U256;
}
