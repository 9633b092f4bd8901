use super::{CategoryRules, NonCombatCategory, OutcomeCategory, RulesProvider};
use crate::character::{Player, StatKey};
use crate::core::constants::{
    BASE_BEAT_DC, MAX_DEATH_CHANCE, MAX_SUCCESS_CHANCE, MIN_POWER_RATIO, MIN_SUCCESS_CHANCE,
    NON_COMBAT_SPREAD, SKILL_CHECK_SCALE, SKILL_CHECK_SPREAD,
};
use crate::world::World;
use rand::Rng;

/// Logistic skill checks over stage-scaled world coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn clamp_success(p: f64) -> f64 {
    p.clamp(MIN_SUCCESS_CHANCE, MAX_SUCCESS_CHANCE)
}

/// Walks the cumulative weights of `table`. Negative weights count as zero;
/// an empty or all-zero table falls back to Survival.
fn roll_category(table: &[(OutcomeCategory, f64)], rng: &mut impl Rng) -> OutcomeCategory {
    let total: f64 = table.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return OutcomeCategory::Survival;
    }

    let roll = rng.gen::<f64>() * total;
    let mut threshold = 0.0;
    for &(category, weight) in table {
        threshold += weight.max(0.0);
        if roll < threshold {
            return category;
        }
    }
    // Float rounding can leave roll == total
    table
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(c, _)| *c)
        .unwrap_or(OutcomeCategory::Survival)
}

impl RulesProvider for StandardRules {
    fn power_ratio(&self, player: &Player, world: &World) -> f64 {
        player.combat_power() / world.enemy_power
    }

    fn skill_check(&self, ratio: f64, threshold: f64, rng: &mut impl Rng) -> (bool, f64) {
        let margin = ratio * SKILL_CHECK_SCALE - threshold;
        let probability = clamp_success(logistic(margin / SKILL_CHECK_SPREAD));
        (self.chance(probability, rng), probability)
    }

    fn combat_chance(&self, player: &Player, world: &World) -> f64 {
        let ratio = self.power_ratio(player, world);
        ratio / (1.0 + ratio)
    }

    fn death_chance(&self, player: &Player, world: &World) -> f64 {
        let ratio = self.power_ratio(player, world).max(MIN_POWER_RATIO);
        (world.lethality / ratio).clamp(0.0, MAX_DEATH_CHANCE)
    }

    fn skill_difficulty(&self, player: &Player, world: &World) -> f64 {
        // Out-levelling a stage shrinks its rewards.
        let level_offset = player.level().saturating_sub(1) as f64;
        world.difficulty * world.beat_dc / (BASE_BEAT_DC + level_offset)
    }

    fn non_combat_category(&self, world: &World, rng: &mut impl Rng) -> NonCombatCategory {
        let category = roll_category(&world.encounter_table, rng);
        NonCombatCategory::new(category, category.base_dc() * world.difficulty)
    }

    fn non_combat_chance(&self, player: &Player, _world: &World, category: &NonCombatCategory) -> f64 {
        let score = self.stat_score(player, category.stat_key);
        clamp_success(logistic((score - category.category_dc) / NON_COMBAT_SPREAD))
    }

    fn stat_score(&self, player: &Player, key: StatKey) -> f64 {
        player.stat_value(key)
    }

    fn category_rules(&self, category: OutcomeCategory) -> CategoryRules {
        CategoryRules::for_category(category)
    }
}
