//! Per-turn statistics record.

use crate::rules::OutcomeCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    Combat,
    NonCombat,
}

impl EncounterKind {
    pub fn name(&self) -> &'static str {
        match self {
            EncounterKind::Combat => "combat",
            EncounterKind::NonCombat => "non_combat",
        }
    }
}

/// Everything decided and produced while resolving one turn.
///
/// Created fresh each turn and filled by exactly one resolver. Fields that
/// belong to the other branch keep their `Default` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnStatistics {
    /// Which resolver wrote this record
    pub encounter: Option<EncounterKind>,
    pub success: bool,

    // ── Combat ──────────────────────────────────────────────────────────
    /// Estimated odds of prevailing, before the skill check
    pub combat_chance: f64,
    /// Probability the combat skill check was rolled at
    pub success_chance_combat: f64,
    pub death_chance: f64,
    pub death: bool,
    pub drop_id: Option<String>,

    // ── Shared rewards ──────────────────────────────────────────────────
    /// Floored experience awarded
    pub xp_earned: i64,
    /// Gold before flooring (may be negative for non-combat failures)
    pub gold_earned: f64,

    // ── Non-combat ──────────────────────────────────────────────────────
    pub outcome_category: Option<OutcomeCategory>,
    /// Difficulty class of the selected category
    pub skill_difficulty: f64,
    pub base_stat: f64,
    pub per_level: f64,
    pub stat_score: f64,
    pub success_chance_non_combat: f64,
}

impl TurnStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_combat(&self) -> bool {
        self.encounter == Some(EncounterKind::Combat)
    }

    pub fn is_non_combat(&self) -> bool {
        self.encounter == Some(EncounterKind::NonCombat)
    }

    /// True when none of the combat-only fields were written.
    pub fn combat_fields_untouched(&self) -> bool {
        self.combat_chance == 0.0
            && self.success_chance_combat == 0.0
            && self.death_chance == 0.0
            && !self.death
            && self.drop_id.is_none()
    }

    /// True when none of the non-combat-only fields were written.
    pub fn non_combat_fields_untouched(&self) -> bool {
        self.outcome_category.is_none()
            && self.skill_difficulty == 0.0
            && self.base_stat == 0.0
            && self.per_level == 0.0
            && self.stat_score == 0.0
            && self.success_chance_non_combat == 0.0
    }
}
