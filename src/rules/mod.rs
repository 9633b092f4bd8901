//! Probability model and reward rules.
//!
//! The resolvers only ever talk to a [`RulesProvider`]. Every method is a
//! pure function of its inputs; the ones that roll take the RNG explicitly so
//! a seeded generator reproduces a whole session.

mod category;
mod standard;

pub use category::{CategoryRules, NonCombatCategory, OutcomeCategory};
pub use standard::{logistic, StandardRules};

use crate::character::{Player, StatKey};
use crate::world::World;
use rand::Rng;

pub trait RulesProvider {
    /// Player fighting strength relative to the world's opposition.
    fn power_ratio(&self, player: &Player, world: &World) -> f64;

    /// Rolls a skill check of `ratio` against `threshold`.
    /// Returns the outcome and the success probability it was rolled at.
    fn skill_check(&self, ratio: f64, threshold: f64, rng: &mut impl Rng) -> (bool, f64);

    /// Bernoulli draw with probability `p`.
    fn chance(&self, p: f64, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < p
    }

    /// Estimated odds of prevailing in a straight fight.
    fn combat_chance(&self, player: &Player, world: &World) -> f64;

    /// Chance of dying after a won fight.
    fn death_chance(&self, player: &Player, world: &World) -> f64;

    /// Scalar difficulty used to size experience rewards.
    fn skill_difficulty(&self, player: &Player, world: &World) -> f64;

    /// Picks this turn's non-combat encounter from the world's table.
    fn non_combat_category(&self, world: &World, rng: &mut impl Rng) -> NonCombatCategory;

    fn non_combat_chance(&self, player: &Player, world: &World, category: &NonCombatCategory) -> f64;

    /// Derived score of the player's stat, as used by the non-combat check.
    fn stat_score(&self, player: &Player, key: StatKey) -> f64;

    fn category_rules(&self, category: OutcomeCategory) -> CategoryRules;
}
