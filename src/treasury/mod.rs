//! Budget distribution treasury
//!
//! A pooled-funds ledger: anyone can fund it, a designated manager earmarks
//! portions for contributors and later reverses or pays them out, and the
//! owner can drain whatever remains unassigned.

pub mod errors;
pub mod events;
pub mod native_distributor;
pub mod token_distributor;


pub use errors::DistributorError;
pub use events::*;
pub use native_distributor::BudgetCsprDistributor;
pub use token_distributor::BudgetTokenDistributor;
