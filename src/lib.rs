#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Token modules
pub mod errors;
pub mod events;
pub mod token;

// Budget distribution modules
pub mod treasury;
