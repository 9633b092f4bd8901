use crate::core::constants::{BASE_STAT_VALUE, NUM_STATS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKey {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl StatKey {
    pub fn all() -> [StatKey; NUM_STATS] {
        [
            StatKey::Strength,
            StatKey::Dexterity,
            StatKey::Constitution,
            StatKey::Intelligence,
            StatKey::Wisdom,
            StatKey::Charisma,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatKey::Strength => "STR",
            StatKey::Dexterity => "DEX",
            StatKey::Constitution => "CON",
            StatKey::Intelligence => "INT",
            StatKey::Wisdom => "WIS",
            StatKey::Charisma => "CHA",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatKey::Strength => 0,
            StatKey::Dexterity => 1,
            StatKey::Constitution => 2,
            StatKey::Intelligence => 3,
            StatKey::Wisdom => 4,
            StatKey::Charisma => 5,
        }
    }
}

/// A stat's starting value and how much it grows each level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub base: f64,
    pub per_level: f64,
}

impl Stat {
    pub fn new(base: f64, per_level: f64) -> Self {
        Self { base, per_level }
    }

    /// Effective value at `level` (level 1 is the base value).
    pub fn value_at(&self, level: u32) -> f64 {
        self.base + self.per_level * level.saturating_sub(1) as f64
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatBlock {
    values: [Stat; NUM_STATS],
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl StatBlock {
    /// Starting spread for a new adventurer: a fighter's lean with some social reach.
    pub fn new() -> Self {
        Self {
            values: [
                Stat::new(BASE_STAT_VALUE + 2.0, 1.0),
                Stat::new(BASE_STAT_VALUE + 1.0, 0.8),
                Stat::new(BASE_STAT_VALUE + 2.0, 0.9),
                Stat::new(BASE_STAT_VALUE, 0.6),
                Stat::new(BASE_STAT_VALUE, 0.6),
                Stat::new(BASE_STAT_VALUE - 1.0, 0.5),
            ],
        }
    }

    /// Every stat at the same base and growth.
    pub fn uniform(base: f64, per_level: f64) -> Self {
        Self {
            values: [Stat::new(base, per_level); NUM_STATS],
        }
    }

    pub fn get(&self, key: StatKey) -> Stat {
        self.values[key.index()]
    }

    pub fn set(&mut self, key: StatKey, stat: Stat) {
        self.values[key.index()] = stat;
    }

    pub fn value_at(&self, key: StatKey, level: u32) -> f64 {
        self.get(key).value_at(level)
    }
}
