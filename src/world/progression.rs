use super::World;
use crate::core::constants::{
    BASE_BEAT_DC, BASE_ENEMY_POWER, BASE_LETHALITY, BEAT_DC_PER_STAGE, LOOT_BONUS_PER_STAGE,
    MAX_LETHALITY, STAGE_SCALING_PER_LEVEL,
};

/// Advances the story by one turn.
///
/// Implementations must be pure: the returned snapshot depends only on the
/// turn index and the previous world.
pub trait StoryProgression {
    fn advance(&self, turn: u32, world: &World) -> World;
}

/// Linear stage progression: a new stage every `turns_per_stage` turns.
#[derive(Debug, Clone, Copy)]
pub struct StageProgression {
    pub turns_per_stage: u32,
}

impl StageProgression {
    pub fn new(turns_per_stage: u32) -> Self {
        Self {
            turns_per_stage: turns_per_stage.max(1),
        }
    }
}

impl StoryProgression for StageProgression {
    fn advance(&self, turn: u32, world: &World) -> World {
        let elapsed = turn + 1;
        let stage = stage_for_turn(elapsed, self.turns_per_stage);
        if stage == world.stage {
            return World {
                turn: elapsed,
                ..world.clone()
            };
        }

        let mult = stage_multiplier(stage);
        tracing::debug!(turn = elapsed, stage, "story advanced to new stage");
        World {
            turn: elapsed,
            stage,
            beat_dc: BASE_BEAT_DC + (stage - 1) as f64 * BEAT_DC_PER_STAGE,
            difficulty: mult,
            enemy_power: BASE_ENEMY_POWER * mult,
            lethality: (BASE_LETHALITY * mult).min(MAX_LETHALITY),
            loot_bonus: (stage - 1) as f64 * LOOT_BONUS_PER_STAGE,
            encounter_table: world.encounter_table.clone(),
        }
    }
}

/// Stage reached after `elapsed` turns.
pub fn stage_for_turn(elapsed: u32, turns_per_stage: u32) -> u32 {
    elapsed / turns_per_stage.max(1) + 1
}

/// Stat multiplier for a stage: stage 1 is 1.0, +10% per stage after.
pub fn stage_multiplier(stage: u32) -> f64 {
    1.0 + (stage.saturating_sub(1) as f64 * STAGE_SCALING_PER_LEVEL)
}
