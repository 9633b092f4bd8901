//! Balance configuration and the leveling curve.
//!
//! Every tunable the turn engine reads lives on [`BalanceConfig`], so
//! independent sessions (parameter sweeps) never share ambient state.

use crate::core::constants::{
    BASE_XP_COMBAT, BASE_XP_NON_COMBAT, COMBAT_CHANCE, GOLD_GROWTH_PER_LEVEL,
    GOLD_PER_COMBAT_STEP, GOLD_PER_NON_COMBAT_STEP, TURNS_PER_STAGE, XP_CURVE_BASE,
    XP_CURVE_EXPONENT,
};
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable constants for one simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Experience multiplier applied to skill difficulty after a won fight.
    pub base_xp_combat: f64,

    /// Experience multiplier applied to skill difficulty after a non-combat encounter.
    pub base_xp_non_combat: f64,

    /// Probability that a turn is a combat encounter.
    pub combat_chance: f64,

    /// Gold yielded per won fight at level 1.
    pub gold_per_combat_step: f64,

    /// Gold yielded per non-combat encounter at level 1 (before category multipliers).
    pub gold_per_non_combat_step: f64,

    /// Fractional growth of both gold yields per level above 1.
    pub gold_growth_per_level: f64,

    /// Turns spent in each story stage.
    pub turns_per_stage: u32,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            base_xp_combat: BASE_XP_COMBAT,
            base_xp_non_combat: BASE_XP_NON_COMBAT,
            combat_chance: COMBAT_CHANCE,
            gold_per_combat_step: GOLD_PER_COMBAT_STEP,
            gold_per_non_combat_step: GOLD_PER_NON_COMBAT_STEP,
            gold_growth_per_level: GOLD_GROWTH_PER_LEVEL,
            turns_per_stage: TURNS_PER_STAGE,
        }
    }
}

impl BalanceConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BalanceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.combat_chance) {
            return Err(SimError::InvalidConfig(format!(
                "combat_chance must be within [0, 1], got {}",
                self.combat_chance
            )));
        }
        if self.turns_per_stage == 0 {
            return Err(SimError::InvalidConfig(
                "turns_per_stage must be at least 1".to_string(),
            ));
        }
        if self.base_xp_combat < 0.0 || self.base_xp_non_combat < 0.0 {
            return Err(SimError::InvalidConfig(
                "base experience multipliers must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// XP required to go from `level` to `level + 1`.
pub fn xp_required_for_level(level: u32) -> i64 {
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)) as i64
}

/// Level reached with `experience` accumulated since level 1.
pub fn level_for_experience(experience: i64) -> u32 {
    let mut level = 1;
    let mut remaining = experience;
    loop {
        let needed = xp_required_for_level(level);
        if remaining < needed {
            return level;
        }
        remaining -= needed;
        level += 1;
    }
}
