//! World/story state.
//!
//! A [`World`] is a per-turn snapshot: the session never mutates one in place,
//! it replaces it with whatever [`StoryProgression::advance`] returns.

mod progression;

pub use progression::{stage_for_turn, stage_multiplier, StageProgression, StoryProgression};

use crate::core::balance::BalanceConfig;
use crate::core::constants::{BASE_BEAT_DC, BASE_ENEMY_POWER, BASE_LETHALITY};
use crate::rules::OutcomeCategory;
use serde::{Deserialize, Serialize};

const STAGE_NAMES: [&str; 10] = [
    "Meadow",
    "Dark Forest",
    "Mountain Pass",
    "Ancient Ruins",
    "Volcanic Wastes",
    "Frozen Tundra",
    "Crystal Caverns",
    "Sunken Kingdom",
    "Floating Isles",
    "Storm Citadel",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Turns elapsed when this snapshot was produced.
    pub turn: u32,
    /// Story stage, starting at 1.
    pub stage: u32,
    /// Threshold the combat skill check is rolled against.
    pub beat_dc: f64,
    /// Stage coefficient scaling skill difficulty and category DCs.
    pub difficulty: f64,
    /// Opposition strength the player's combat power is measured against.
    pub enemy_power: f64,
    /// Base death coefficient after a won fight.
    pub lethality: f64,
    /// Additive bonus to the loot drop chance.
    pub loot_bonus: f64,
    /// Weighted non-combat encounter table.
    pub encounter_table: Vec<(OutcomeCategory, f64)>,
}

impl World {
    pub fn stage_name(&self) -> &'static str {
        let idx = (self.stage.max(1) as usize - 1).min(STAGE_NAMES.len() - 1);
        STAGE_NAMES[idx]
    }
}

/// Initial world. Independent of the player.
pub fn create_world(_config: &BalanceConfig) -> World {
    World {
        turn: 0,
        stage: 1,
        beat_dc: BASE_BEAT_DC,
        difficulty: 1.0,
        enemy_power: BASE_ENEMY_POWER,
        lethality: BASE_LETHALITY,
        loot_bonus: 0.0,
        encounter_table: default_encounter_table(),
    }
}

pub fn default_encounter_table() -> Vec<(OutcomeCategory, f64)> {
    vec![
        (OutcomeCategory::Persuasion, 3.0),
        (OutcomeCategory::Trade, 2.0),
        (OutcomeCategory::Investigation, 3.0),
        (OutcomeCategory::Athletics, 2.0),
        (OutcomeCategory::Stealth, 2.0),
        (OutcomeCategory::Survival, 3.0),
    ]
}
