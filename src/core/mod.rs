//! Balance configuration and tuning constants.

pub mod balance;
pub mod constants;

pub use balance::*;
