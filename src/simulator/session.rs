//! The turn loop.

use super::combat::resolve_combat;
use super::context::TurnContext;
use super::non_combat::resolve_non_combat;
use super::recorder::Recorder;
use super::statistics::TurnStatistics;
use crate::character::Player;
use crate::core::balance::BalanceConfig;
use crate::error::Result;
use crate::items::{LootTable, StandardLoot};
use crate::rules::{RulesProvider, StandardRules};
use crate::world::{create_world, StageProgression, StoryProgression, World};
use rand::Rng;

/// One simulated play session.
///
/// Owns the player and the current world snapshot for its whole lifetime;
/// resolvers only borrow them for a single call.
#[derive(Debug)]
pub struct Session<R, L, S> {
    balance: BalanceConfig,
    rules: R,
    loot: L,
    story: S,
    player: Player,
    world: World,
}

impl Session<StandardRules, StandardLoot, StageProgression> {
    /// Session wired to the built-in rules, loot table and stage progression.
    pub fn standard(balance: BalanceConfig) -> Self {
        let story = StageProgression::new(balance.turns_per_stage);
        Self::new(balance, StandardRules, StandardLoot, story)
    }
}

impl<R: RulesProvider, L: LootTable, S: StoryProgression> Session<R, L, S> {
    pub fn new(balance: BalanceConfig, rules: R, loot: L, story: S) -> Self {
        let player = Player::new(&balance);
        let world = create_world(&balance);
        Self {
            balance,
            rules,
            loot,
            story,
            player,
            world,
        }
    }

    /// Replaces the starting player (custom stat spreads).
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn balance(&self) -> &BalanceConfig {
        &self.balance
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    /// Resolves one turn and advances the world. Returns the turn's statistics.
    pub fn play_turn(&mut self, turn: u32, rng: &mut impl Rng) -> TurnStatistics {
        let mut stats = TurnStatistics::new();
        let ctx = TurnContext::new(&self.rules, &self.loot, &self.balance);

        if self.rules.chance(self.balance.combat_chance, rng) {
            resolve_combat(&mut self.player, &self.world, &mut stats, &ctx, rng);
        } else {
            resolve_non_combat(&mut self.player, &self.world, &mut stats, &ctx, rng);
        }

        self.world = self.story.advance(turn, &self.world);
        stats
    }

    /// Plays `turns` turns, handing each to `recorder` once it is fully resolved.
    ///
    /// Stops at the first recorder error; the turn that failed to record has
    /// already been applied to the player.
    pub fn run(&mut self, turns: u32, recorder: &mut impl Recorder, rng: &mut impl Rng) -> Result<()> {
        tracing::info!(
            turns,
            combat_chance = self.balance.combat_chance,
            "session started"
        );

        for turn in 0..turns {
            let stats = self.play_turn(turn, rng);
            tracing::debug!(
                turn,
                encounter = stats.encounter.map(|e| e.name()).unwrap_or("none"),
                success = stats.success,
                xp = stats.xp_earned,
                gold = stats.gold_earned,
                level = self.player.level(),
                "turn resolved"
            );
            recorder.record_turn(turn, &self.player, &self.world, &stats)?;
        }

        tracing::info!(
            level = self.player.level(),
            experience = self.player.experience,
            gold = self.player.gold,
            items = self.player.inventory.len(),
            stage = self.world.stage,
            "session finished"
        );
        Ok(())
    }
}

/// Runs a standard session of `turns` turns and returns the final player.
pub fn simulate(
    turns: u32,
    balance: BalanceConfig,
    recorder: &mut impl Recorder,
    rng: &mut impl Rng,
) -> Result<Player> {
    let mut session = Session::standard(balance);
    session.run(turns, recorder, rng)?;
    Ok(session.into_player())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::recorder::{MemoryRecorder, NullRecorder};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_turns_leaves_player_untouched() {
        let balance = BalanceConfig::default();
        let mut recorder = MemoryRecorder::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let player = simulate(0, balance.clone(), &mut recorder, &mut rng).unwrap();

        assert!(recorder.records.is_empty());
        assert_eq!(player, Player::new(&balance));
    }

    #[test]
    fn test_every_turn_recorded_in_order() {
        let mut recorder = MemoryRecorder::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        simulate(50, BalanceConfig::default(), &mut recorder, &mut rng).unwrap();

        assert_eq!(recorder.records.len(), 50);
        for (i, record) in recorder.records.iter().enumerate() {
            assert_eq!(record.turn, i as u32);
            assert!(record.stats.encounter.is_some());
        }
    }

    #[test]
    fn test_world_replaced_each_turn() {
        let mut session = Session::standard(BalanceConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for turn in 0..5 {
            session.play_turn(turn, &mut rng);
            assert_eq!(session.world().turn, turn + 1);
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed| {
            let mut recorder = MemoryRecorder::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            simulate(200, BalanceConfig::default(), &mut recorder, &mut rng).unwrap();
            recorder.records
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_combat_only_and_non_combat_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let mut all_combat = Session::standard(BalanceConfig {
            combat_chance: 1.0,
            ..Default::default()
        });
        for turn in 0..100 {
            assert!(all_combat.play_turn(turn, &mut rng).is_combat());
        }

        let mut no_combat = Session::standard(BalanceConfig {
            combat_chance: 0.0,
            ..Default::default()
        });
        for turn in 0..100 {
            assert!(no_combat.play_turn(turn, &mut rng).is_non_combat());
        }
    }

    #[test]
    fn test_long_session_progresses() {
        let mut session = Session::standard(BalanceConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        session.run(500, &mut NullRecorder, &mut rng).unwrap();

        assert!(session.player().level() > 1);
        assert!(session.player().experience > 0);
        assert!(session.world().stage > 1);
    }
}
