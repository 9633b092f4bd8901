//! Items and loot tables.

pub mod drops;
pub mod types;

pub use drops::*;
pub use types::*;
