//! The persistent player character.

use super::attributes::{Stat, StatBlock, StatKey};
use crate::core::balance::{level_for_experience, BalanceConfig};
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Per-step gold yields at level 1, copied from the balance config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldYield {
    pub combat: f64,
    pub non_combat: f64,
    pub growth_per_level: f64,
}

impl GoldYield {
    pub fn from_config(config: &BalanceConfig) -> Self {
        Self {
            combat: config.gold_per_combat_step,
            non_combat: config.gold_per_non_combat_step,
            growth_per_level: config.gold_growth_per_level,
        }
    }

    fn level_multiplier(&self, level: u32) -> f64 {
        1.0 + self.growth_per_level * level.saturating_sub(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub stats: StatBlock,
    pub experience: i64,
    pub gold: i64,
    pub inventory: Vec<Item>,
    gold_yield: GoldYield,
}

impl Player {
    pub fn new(config: &BalanceConfig) -> Self {
        Self::with_stats(StatBlock::new(), config)
    }

    pub fn with_stats(stats: StatBlock, config: &BalanceConfig) -> Self {
        Self {
            stats,
            experience: 0,
            gold: 0,
            inventory: Vec::new(),
            gold_yield: GoldYield::from_config(config),
        }
    }

    pub fn level(&self) -> u32 {
        level_for_experience(self.experience)
    }

    /// Adds experience. Returns the number of levels gained.
    pub fn award_exp(&mut self, amount: i64) -> u32 {
        let before = self.level();
        self.experience += amount;
        self.level().saturating_sub(before)
    }

    /// Adds (or, for negative amounts, removes) gold.
    pub fn award_gold(&mut self, amount: i64) {
        self.gold += amount;
    }

    pub fn award_loot(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn stat(&self, key: StatKey) -> Stat {
        self.stats.get(key)
    }

    /// Effective stat value at the current level.
    pub fn stat_value(&self, key: StatKey) -> f64 {
        self.stats.value_at(key, self.level())
    }

    /// Raw fighting strength: mean of the physical stats.
    pub fn combat_power(&self) -> f64 {
        let physical = [StatKey::Strength, StatKey::Dexterity, StatKey::Constitution];
        physical.iter().map(|&k| self.stat_value(k)).sum::<f64>() / physical.len() as f64
    }

    /// Gold yielded by one won fight at the current level.
    pub fn combat_gold(&self) -> f64 {
        self.gold_yield.combat * self.gold_yield.level_multiplier(self.level())
    }

    /// Gold yielded by one non-combat encounter at the current level, before category multipliers.
    pub fn non_combat_gold(&self) -> f64 {
        self.gold_yield.non_combat * self.gold_yield.level_multiplier(self.level())
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|i| i.item_id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemBase, Rarity};

    fn config() -> BalanceConfig {
        BalanceConfig {
            gold_per_combat_step: 10.0,
            gold_per_non_combat_step: 4.0,
            gold_growth_per_level: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_player_starts_at_level_one() {
        let player = Player::new(&config());
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience, 0);
        assert_eq!(player.gold, 0);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_award_exp_reports_level_ups() {
        let mut player = Player::new(&config());
        assert_eq!(player.award_exp(50), 0);
        assert_eq!(player.award_exp(50), 1);
        assert_eq!(player.level(), 2);
        // Enough for levels 3 and 4 in one award (282 + 519)
        assert_eq!(player.award_exp(801), 2);
        assert_eq!(player.level(), 4);
    }

    #[test]
    fn test_award_gold_can_go_negative() {
        let mut player = Player::new(&config());
        player.award_gold(5);
        player.award_gold(-8);
        assert_eq!(player.gold, -3);
    }

    #[test]
    fn test_gold_yield_scales_with_level() {
        let mut player = Player::new(&config());
        assert!((player.combat_gold() - 10.0).abs() < 1e-9);
        assert!((player.non_combat_gold() - 4.0).abs() < 1e-9);

        player.award_exp(100);
        assert_eq!(player.level(), 2);
        assert!((player.combat_gold() - 15.0).abs() < 1e-9);
        assert!((player.non_combat_gold() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_value_grows_with_level() {
        let mut player = Player::with_stats(StatBlock::uniform(10.0, 2.0), &config());
        assert_eq!(player.stat_value(StatKey::Wisdom), 10.0);
        player.award_exp(100);
        assert_eq!(player.stat_value(StatKey::Wisdom), 12.0);
        assert_eq!(player.stat(StatKey::Wisdom), Stat::new(10.0, 2.0));
    }

    #[test]
    fn test_combat_power_is_physical_mean() {
        let mut stats = StatBlock::uniform(10.0, 0.0);
        stats.set(StatKey::Strength, Stat::new(16.0, 0.0));
        stats.set(StatKey::Intelligence, Stat::new(30.0, 0.0));
        let player = Player::with_stats(stats, &config());
        assert!((player.combat_power() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_award_loot() {
        let mut player = Player::new(&config());
        player.award_loot(Item::new(ItemBase::Sword, Rarity::Common, 1));
        assert!(player.has_item("sword-1"));
        assert!(!player.has_item("axe-1"));
    }
}
