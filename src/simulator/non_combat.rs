//! Non-combat encounter resolution.

use super::context::TurnContext;
use super::statistics::{EncounterKind, TurnStatistics};
use crate::character::Player;
use crate::rules::RulesProvider;
use crate::world::World;
use rand::Rng;

/// Resolves one non-combat encounter, mutating `player` and filling `stats`.
///
/// Never short-circuits: success and failure both pay experience and gold,
/// sized by the category's multiplier pair. Gold may be negative.
pub fn resolve_non_combat<R: RulesProvider, L>(
    player: &mut Player,
    world: &World,
    stats: &mut TurnStatistics,
    ctx: &TurnContext<'_, R, L>,
    rng: &mut impl Rng,
) {
    let rules = ctx.rules;
    stats.encounter = Some(EncounterKind::NonCombat);

    let selected = rules.non_combat_category(world, rng);
    stats.outcome_category = Some(selected.category);
    stats.skill_difficulty = selected.category_dc;

    let stat = player.stat(selected.stat_key);
    stats.base_stat = stat.base;
    stats.per_level = stat.per_level;

    let chance = rules.non_combat_chance(player, world, &selected);
    let success = rules.chance(chance, rng);
    stats.stat_score = rules.stat_score(player, selected.stat_key);
    stats.success_chance_non_combat = chance;
    stats.success = success;

    let reward = rules.category_rules(selected.category);
    let xp = (rules.skill_difficulty(player, world)
        * ctx.balance.base_xp_non_combat
        * reward.xp_multiplier(success))
    .floor() as i64;
    player.award_exp(xp);
    stats.xp_earned = xp;

    let gold = player.non_combat_gold() * reward.gold_multiplier(success);
    player.award_gold(gold.floor() as i64);
    stats.gold_earned = gold;

    tracing::trace!(
        category = selected.category.name(),
        success,
        xp,
        gold,
        "non-combat resolved"
    );
}
