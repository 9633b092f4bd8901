//! Combat encounter resolution.

use super::context::TurnContext;
use super::statistics::{EncounterKind, TurnStatistics};
use crate::character::Player;
use crate::items::LootTable;
use crate::rules::RulesProvider;
use crate::world::World;
use rand::Rng;

/// Sign applied to the combat gold yield.
///
/// Rewards are only paid after a won fight, so this is always `1.0` on the
/// live path; the failure sign is kept so the yield formula reads the same
/// as the non-combat one.
fn combat_gold_sign(success: bool) -> f64 {
    if success {
        1.0
    } else {
        -1.0
    }
}

/// Resolves one combat encounter, mutating `player` and filling `stats`.
///
/// A lost skill check ends the encounter with no death roll and no rewards.
/// A won fight rolls for death; only a survivor earns experience, gold and
/// a loot draw.
pub fn resolve_combat<R: RulesProvider, L: LootTable>(
    player: &mut Player,
    world: &World,
    stats: &mut TurnStatistics,
    ctx: &TurnContext<'_, R, L>,
    rng: &mut impl Rng,
) {
    let rules = ctx.rules;
    stats.encounter = Some(EncounterKind::Combat);
    stats.combat_chance = rules.combat_chance(player, world);

    let ratio = rules.power_ratio(player, world);
    let (success, probability) = rules.skill_check(ratio, world.beat_dc, rng);
    stats.success_chance_combat = probability;
    stats.success = success;

    if !success {
        tracing::trace!(probability, "combat lost");
        return;
    }

    let death_chance = rules.death_chance(player, world);
    let death = rules.chance(death_chance, rng);
    stats.death_chance = death_chance;
    stats.death = death;

    if death {
        tracing::trace!(death_chance, "won the fight but died");
        return;
    }

    let xp = (rules.skill_difficulty(player, world) * ctx.balance.base_xp_combat).floor() as i64;
    player.award_exp(xp);
    stats.xp_earned = xp;

    let gold = player.combat_gold() * combat_gold_sign(success);
    player.award_gold(gold.floor() as i64);
    stats.gold_earned = gold;

    if let Some(item) = ctx.loot.draw(world, rng) {
        tracing::trace!(item = %item.item_id, rarity = item.rarity.name(), "loot dropped");
        stats.drop_id = Some(item.item_id.clone());
        player.award_loot(item);
    }
}
