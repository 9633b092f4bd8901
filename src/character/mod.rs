//! Player character: stats, progression, and inventory.

pub mod attributes;
pub mod player;

pub use attributes::*;
pub use player::*;
