//! turnsim - turn-based RPG session simulator
//!
//! Resolves combat and non-combat encounters turn by turn against an evolving
//! world, tracks a persistent player character, and emits per-turn statistics
//! for balance analysis.

pub mod character;
pub mod core;
pub mod error;
pub mod items;
pub mod rules;
pub mod simulator;
pub mod world;

pub use character::{Player, Stat, StatKey};
pub use crate::core::balance::BalanceConfig;
pub use error::{Result, SimError};
pub use items::{Item, LootTable};
pub use rules::{RulesProvider, StandardRules};
pub use simulator::{simulate, Session, SimConfig, TurnStatistics};
pub use world::{StoryProgression, World};
