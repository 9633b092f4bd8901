use crate::character::StatKey;
use serde::{Deserialize, Serialize};

/// Kind of non-combat encounter. Each kind is governed by one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Persuasion,
    Trade,
    Investigation,
    Athletics,
    Stealth,
    Survival,
}

impl OutcomeCategory {
    pub fn all() -> [OutcomeCategory; 6] {
        [
            OutcomeCategory::Persuasion,
            OutcomeCategory::Trade,
            OutcomeCategory::Investigation,
            OutcomeCategory::Athletics,
            OutcomeCategory::Stealth,
            OutcomeCategory::Survival,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutcomeCategory::Persuasion => "Persuasion",
            OutcomeCategory::Trade => "Trade",
            OutcomeCategory::Investigation => "Investigation",
            OutcomeCategory::Athletics => "Athletics",
            OutcomeCategory::Stealth => "Stealth",
            OutcomeCategory::Survival => "Survival",
        }
    }

    pub fn stat_key(&self) -> StatKey {
        match self {
            OutcomeCategory::Persuasion | OutcomeCategory::Trade => StatKey::Charisma,
            OutcomeCategory::Investigation => StatKey::Intelligence,
            OutcomeCategory::Athletics => StatKey::Strength,
            OutcomeCategory::Stealth => StatKey::Dexterity,
            OutcomeCategory::Survival => StatKey::Wisdom,
        }
    }

    /// Difficulty class at stage 1.
    pub fn base_dc(&self) -> f64 {
        match self {
            OutcomeCategory::Persuasion => 11.0,
            OutcomeCategory::Trade => 12.0,
            OutcomeCategory::Investigation => 11.0,
            OutcomeCategory::Athletics => 10.0,
            OutcomeCategory::Stealth => 12.0,
            OutcomeCategory::Survival => 10.0,
        }
    }
}

/// A selected non-combat encounter: its category, governing stat and difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonCombatCategory {
    pub category: OutcomeCategory,
    pub stat_key: StatKey,
    pub category_dc: f64,
}

impl NonCombatCategory {
    pub fn new(category: OutcomeCategory, category_dc: f64) -> Self {
        Self {
            category,
            stat_key: category.stat_key(),
            category_dc,
        }
    }
}

/// Reward multipliers for a non-combat category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRules {
    pub gold_success: f64,
    pub gold_fail: f64,
    pub xp_success: f64,
    pub xp_fail: f64,
}

impl CategoryRules {
    pub fn for_category(category: OutcomeCategory) -> Self {
        let (gold_success, gold_fail, xp_success, xp_fail) = match category {
            OutcomeCategory::Persuasion => (1.0, -0.25, 1.0, 0.4),
            OutcomeCategory::Trade => (2.0, -0.75, 0.6, 0.2),
            OutcomeCategory::Investigation => (0.8, 0.0, 1.2, 0.5),
            OutcomeCategory::Athletics => (0.6, -0.1, 1.0, 0.3),
            OutcomeCategory::Stealth => (1.4, -0.5, 1.1, 0.25),
            OutcomeCategory::Survival => (0.3, 0.0, 1.5, 0.6),
        };
        Self {
            gold_success,
            gold_fail,
            xp_success,
            xp_fail,
        }
    }

    pub fn gold_multiplier(&self, success: bool) -> f64 {
        if success {
            self.gold_success
        } else {
            self.gold_fail
        }
    }

    pub fn xp_multiplier(&self, success: bool) -> f64 {
        if success {
            self.xp_success
        } else {
            self.xp_fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_lookup_is_deterministic() {
        for category in OutcomeCategory::all() {
            assert_eq!(
                CategoryRules::for_category(category),
                CategoryRules::for_category(category)
            );
        }
    }

    #[test]
    fn test_success_never_pays_less_than_failure() {
        for category in OutcomeCategory::all() {
            let rules = CategoryRules::for_category(category);
            assert!(rules.gold_success >= rules.gold_fail, "{category:?}");
            assert!(rules.xp_success >= rules.xp_fail, "{category:?}");
            assert!(rules.xp_fail >= 0.0, "{category:?}");
        }
    }

    #[test]
    fn test_multiplier_selection() {
        let rules = CategoryRules::for_category(OutcomeCategory::Trade);
        assert_eq!(rules.gold_multiplier(true), 2.0);
        assert_eq!(rules.gold_multiplier(false), -0.75);
        assert_eq!(rules.xp_multiplier(true), 0.6);
        assert_eq!(rules.xp_multiplier(false), 0.2);
    }

    #[test]
    fn test_category_carries_governing_stat() {
        let selected = NonCombatCategory::new(OutcomeCategory::Stealth, 12.0);
        assert_eq!(selected.stat_key, StatKey::Dexterity);
        assert_eq!(selected.category_dc, 12.0);
    }
}
