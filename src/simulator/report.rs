//! Simulation report generation.

use super::recorder::SessionSummary;
use crate::items::Rarity;
use crate::rules::OutcomeCategory;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub turns_per_run: u32,

    // Progression
    pub avg_final_level: f64,
    pub avg_final_experience: f64,
    pub avg_final_gold: f64,
    pub avg_final_stage: f64,
    pub min_final_level: u32,
    pub max_final_level: u32,

    // Encounter mix
    pub combat_fraction: f64,
    pub combat_win_rate: f64,
    pub death_rate: f64,
    pub non_combat_success_rate: f64,

    // Loot
    pub avg_drops: f64,
    pub drops_by_rarity: BTreeMap<Rarity, u32>,

    // Non-combat breakdown
    pub category_counts: BTreeMap<OutcomeCategory, u32>,

    // Individual sessions for detailed analysis
    #[serde(skip)]
    pub sessions: Vec<SessionSummary>,
}

impl SimReport {
    /// Create a new report from completed session summaries.
    pub fn from_runs(sessions: Vec<SessionSummary>, turns_per_run: u32) -> Self {
        let num_runs = sessions.len() as u32;

        let avg_final_level = mean(&sessions, |s| s.final_level as f64);
        let avg_final_experience = mean(&sessions, |s| s.final_experience as f64);
        let avg_final_gold = mean(&sessions, |s| s.final_gold as f64);
        let avg_final_stage = mean(&sessions, |s| s.final_stage as f64);
        let avg_drops = mean(&sessions, |s| s.drops as f64);

        let min_final_level = sessions.iter().map(|s| s.final_level).min().unwrap_or(0);
        let max_final_level = sessions.iter().map(|s| s.final_level).max().unwrap_or(0);

        // Pooled rates: every turn weighs the same regardless of session
        let turns = total(&sessions, |s| s.turns);
        let combat_turns = total(&sessions, |s| s.combat_turns);
        let combat_wins = total(&sessions, |s| s.combat_wins);
        let deaths = total(&sessions, |s| s.deaths);
        let non_combat_turns = total(&sessions, |s| s.non_combat_turns);
        let non_combat_successes = total(&sessions, |s| s.non_combat_successes);

        let mut drops_by_rarity = BTreeMap::new();
        let mut category_counts = BTreeMap::new();
        for s in &sessions {
            for (rarity, count) in &s.drops_by_rarity {
                *drops_by_rarity.entry(*rarity).or_insert(0) += count;
            }
            for (category, count) in &s.category_counts {
                *category_counts.entry(*category).or_insert(0) += count;
            }
        }

        Self {
            num_runs,
            turns_per_run,
            avg_final_level,
            avg_final_experience,
            avg_final_gold,
            avg_final_stage,
            min_final_level,
            max_final_level,
            combat_fraction: rate(combat_turns, turns),
            combat_win_rate: rate(combat_wins, combat_turns),
            death_rate: rate(deaths, combat_wins),
            non_combat_success_rate: rate(non_combat_successes, non_combat_turns),
            avg_drops,
            drops_by_rarity,
            category_counts,
            sessions,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} turns\n\n",
            self.num_runs, self.turns_per_run
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1} (min {}, max {})\n",
            self.avg_final_level, self.min_final_level, self.max_final_level
        ));
        report.push_str(&format!(
            "  Avg Final XP:        {:.0}\n",
            self.avg_final_experience
        ));
        report.push_str(&format!(
            "  Avg Final Gold:      {:.0}\n",
            self.avg_final_gold
        ));
        report.push_str(&format!(
            "  Avg Final Stage:     {:.1}\n\n",
            self.avg_final_stage
        ));

        report.push_str("── ENCOUNTERS ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Combat Fraction:     {:.1}%\n",
            self.combat_fraction * 100.0
        ));
        report.push_str(&format!(
            "  Combat Win Rate:     {:.1}%\n",
            self.combat_win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Deaths per Win:      {:.1}%\n",
            self.death_rate * 100.0
        ));
        report.push_str(&format!(
            "  Non-Combat Success:  {:.1}%\n\n",
            self.non_combat_success_rate * 100.0
        ));

        report.push_str("── NON-COMBAT CATEGORIES ────────────────────────────────────────\n");
        let category_total: u32 = self.category_counts.values().sum();
        for (category, count) in &self.category_counts {
            let pct = rate(*count, category_total) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<14} {:>5.1}% {}\n",
                category.name(),
                pct,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Drops per Run:   {:.1}\n", self.avg_drops));
        for (rarity, count) in &self.drops_by_rarity {
            report.push_str(&format!("  {:<10} {}\n", rarity.name(), count));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        if self.combat_win_rate > 0.9 {
            report.push_str("  ⚠️  Fights are almost always won - beat DC too low?\n");
        } else if self.combat_win_rate < 0.3 && self.combat_fraction > 0.0 {
            report.push_str("  ⚠️  Most fights are lost - beat DC too high?\n");
        }
        if self.death_rate > 0.25 {
            report.push_str("  ⚠️  Over a quarter of won fights end in death\n");
        }
        if self.avg_final_gold < 0.0 {
            report.push_str("  ⚠️  Sessions end in debt - non-combat failure penalties too steep?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn mean(sessions: &[SessionSummary], f: impl Fn(&SessionSummary) -> f64) -> f64 {
    if sessions.is_empty() {
        0.0
    } else {
        sessions.iter().map(f).sum::<f64>() / sessions.len() as f64
    }
}

fn total(sessions: &[SessionSummary], f: impl Fn(&SessionSummary) -> u32) -> u32 {
    sessions.iter().map(f).sum()
}

fn rate(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
