// Default session tunables (overridable through BalanceConfig)
pub const BASE_XP_COMBAT: f64 = 25.0;
pub const BASE_XP_NON_COMBAT: f64 = 15.0;
pub const COMBAT_CHANCE: f64 = 0.6;
pub const GOLD_PER_COMBAT_STEP: f64 = 12.0;
pub const GOLD_PER_NON_COMBAT_STEP: f64 = 8.0;
pub const GOLD_GROWTH_PER_LEVEL: f64 = 0.1;
pub const TURNS_PER_STAGE: u32 = 25;

// XP and leveling
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Character stats
pub const NUM_STATS: usize = 6;
pub const BASE_STAT_VALUE: f64 = 10.0;

// World stages
pub const BASE_BEAT_DC: f64 = 10.0;
pub const BEAT_DC_PER_STAGE: f64 = 1.5;
pub const BASE_ENEMY_POWER: f64 = 10.0;
pub const STAGE_SCALING_PER_LEVEL: f64 = 0.1;
pub const BASE_LETHALITY: f64 = 0.08;
pub const MAX_LETHALITY: f64 = 0.3;
pub const LOOT_BONUS_PER_STAGE: f64 = 0.01;

// Skill checks
pub const SKILL_CHECK_SCALE: f64 = 20.0;
pub const SKILL_CHECK_SPREAD: f64 = 5.0;
pub const NON_COMBAT_SPREAD: f64 = 3.0;
pub const MIN_SUCCESS_CHANCE: f64 = 0.05;
pub const MAX_SUCCESS_CHANCE: f64 = 0.95;
pub const MAX_DEATH_CHANCE: f64 = 0.5;
pub const MIN_POWER_RATIO: f64 = 0.1;

// Item drops
pub const ITEM_DROP_BASE_CHANCE: f64 = 0.15;
pub const ITEM_DROP_MAX_CHANCE: f64 = 0.25;
pub const RARITY_STAGE_BONUS_PER_STAGE: f64 = 0.01;
pub const RARITY_STAGE_BONUS_CAP: f64 = 0.10;
pub const ILVL_PER_STAGE: u32 = 10;
