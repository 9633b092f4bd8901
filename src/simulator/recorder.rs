//! Sinks for per-turn statistics.

use super::statistics::{EncounterKind, TurnStatistics};
use crate::character::Player;
use crate::error::Result;
use crate::items::Rarity;
use crate::rules::OutcomeCategory;
use crate::world::World;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Receives one call per resolved turn, after the world has advanced.
pub trait Recorder {
    /// Called before the first turn of each session in a multi-run simulation.
    fn start_session(&mut self, _session: u32) -> Result<()> {
        Ok(())
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()>;

    /// Called once all sessions are done.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Recorder + ?Sized> Recorder for &mut R {
    fn start_session(&mut self, session: u32) -> Result<()> {
        (**self).start_session(session)
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        (**self).record_turn(turn, player, world, stats)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// An absent sink records nothing.
impl<R: Recorder> Recorder for Option<R> {
    fn start_session(&mut self, session: u32) -> Result<()> {
        match self {
            Some(r) => r.start_session(session),
            None => Ok(()),
        }
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        match self {
            Some(r) => r.record_turn(turn, player, world, stats),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            Some(r) => r.finish(),
            None => Ok(()),
        }
    }
}

/// Discards every turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn record_turn(&mut self, _: u32, _: &Player, _: &World, _: &TurnStatistics) -> Result<()> {
        Ok(())
    }
}

/// Fans every call out to two recorders, left first.
#[derive(Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: Recorder, B: Recorder> Recorder for Tee<A, B> {
    fn start_session(&mut self, session: u32) -> Result<()> {
        self.0.start_session(session)?;
        self.1.start_session(session)
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        self.0.record_turn(turn, player, world, stats)?;
        self.1.record_turn(turn, player, world, stats)
    }

    fn finish(&mut self) -> Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Snapshot of one turn: player/world state after the turn plus its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub session: u32,
    pub turn: u32,
    pub stage: u32,
    pub level: u32,
    pub experience: i64,
    pub gold: i64,
    pub inventory_size: usize,
    #[serde(flatten)]
    pub stats: TurnStatistics,
}

impl TurnRecord {
    pub fn capture(
        session: u32,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Self {
        Self {
            session,
            turn,
            stage: world.stage,
            level: player.level(),
            experience: player.experience,
            gold: player.gold,
            inventory_size: player.inventory.len(),
            stats: stats.clone(),
        }
    }
}

/// Keeps every turn in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    pub records: Vec<TurnRecord>,
    session: u32,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Recorder for MemoryRecorder {
    fn start_session(&mut self, session: u32) -> Result<()> {
        self.session = session;
        Ok(())
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        self.records
            .push(TurnRecord::capture(self.session, turn, player, world, stats));
        Ok(())
    }
}

pub const CSV_HEADER: &str = "session,turn,stage,level,experience,gold,inventory,encounter,success,\
combat_chance,success_chance_combat,death_chance,death,drop_id,xp_earned,gold_earned,\
outcome_category,skill_difficulty,base_stat,per_level,stat_score,success_chance_non_combat";

/// Time-series CSV, one row per turn.
#[derive(Debug)]
pub struct CsvRecorder<W: Write> {
    writer: W,
    session: u32,
    header_written: bool,
}

impl<W: Write> CsvRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            session: 0,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Recorder for CsvRecorder<W> {
    fn start_session(&mut self, session: u32) -> Result<()> {
        self.session = session;
        Ok(())
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{},{},{},{:.4},{:.4},{:.4},{},{},{},{:.4},{},{:.4},{:.4},{:.4},{:.4},{:.4}",
            self.session,
            turn,
            world.stage,
            player.level(),
            player.experience,
            player.gold,
            player.inventory.len(),
            stats.encounter.map(|e| e.name()).unwrap_or(""),
            stats.success,
            stats.combat_chance,
            stats.success_chance_combat,
            stats.death_chance,
            stats.death,
            stats.drop_id.as_deref().unwrap_or(""),
            stats.xp_earned,
            stats.gold_earned,
            stats.outcome_category.map(|c| c.name()).unwrap_or(""),
            stats.skill_difficulty,
            stats.base_stat,
            stats.per_level,
            stats.stat_score,
            stats.success_chance_non_combat,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Newline-delimited JSON, one [`TurnRecord`] per line.
#[derive(Debug)]
pub struct JsonLinesRecorder<W: Write> {
    writer: W,
    session: u32,
}

impl<W: Write> JsonLinesRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, session: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Recorder for JsonLinesRecorder<W> {
    fn start_session(&mut self, session: u32) -> Result<()> {
        self.session = session;
        Ok(())
    }

    fn record_turn(
        &mut self,
        turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        let record = TurnRecord::capture(self.session, turn, player, world, stats);
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Aggregate counters for a single session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub turns: u32,
    pub combat_turns: u32,
    pub combat_wins: u32,
    pub deaths: u32,
    pub non_combat_turns: u32,
    pub non_combat_successes: u32,
    pub total_xp_earned: i64,
    /// Sum of raw (pre-floor) gold amounts
    pub total_gold_earned: f64,
    pub drops: u32,
    pub category_counts: BTreeMap<OutcomeCategory, u32>,
    pub drops_by_rarity: BTreeMap<Rarity, u32>,
    pub final_level: u32,
    pub final_experience: i64,
    pub final_gold: i64,
    pub final_stage: u32,
}

impl SessionSummary {
    pub fn combat_fraction(&self) -> f64 {
        ratio(self.combat_turns, self.turns)
    }

    pub fn combat_win_rate(&self) -> f64 {
        ratio(self.combat_wins, self.combat_turns)
    }

    /// Deaths per won fight.
    pub fn death_rate(&self) -> f64 {
        ratio(self.deaths, self.combat_wins)
    }

    pub fn non_combat_success_rate(&self) -> f64 {
        ratio(self.non_combat_successes, self.non_combat_turns)
    }
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Folds turns into a [`SessionSummary`] per session.
#[derive(Debug, Clone, Default)]
pub struct SummaryRecorder {
    current: SessionSummary,
    completed: Vec<SessionSummary>,
    started: bool,
}

impl SummaryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary of the session currently being recorded.
    pub fn current(&self) -> &SessionSummary {
        &self.current
    }

    /// All sessions, including the one in progress.
    pub fn into_summaries(mut self) -> Vec<SessionSummary> {
        if self.started {
            self.completed.push(self.current);
        }
        self.completed
    }
}

impl Recorder for SummaryRecorder {
    fn start_session(&mut self, _session: u32) -> Result<()> {
        if self.started {
            self.completed.push(std::mem::take(&mut self.current));
        }
        self.started = true;
        Ok(())
    }

    fn record_turn(
        &mut self,
        _turn: u32,
        player: &Player,
        world: &World,
        stats: &TurnStatistics,
    ) -> Result<()> {
        self.started = true;
        let s = &mut self.current;
        s.turns += 1;

        match stats.encounter {
            Some(EncounterKind::Combat) => {
                s.combat_turns += 1;
                if stats.success {
                    s.combat_wins += 1;
                }
                if stats.death {
                    s.deaths += 1;
                }
                if stats.drop_id.is_some() {
                    s.drops += 1;
                    if let Some(item) = player.inventory.last() {
                        *s.drops_by_rarity.entry(item.rarity).or_insert(0) += 1;
                    }
                }
            }
            Some(EncounterKind::NonCombat) => {
                s.non_combat_turns += 1;
                if stats.success {
                    s.non_combat_successes += 1;
                }
                if let Some(category) = stats.outcome_category {
                    *s.category_counts.entry(category).or_insert(0) += 1;
                }
            }
            None => {}
        }

        s.total_xp_earned += stats.xp_earned;
        s.total_gold_earned += stats.gold_earned;
        s.final_level = player.level();
        s.final_experience = player.experience;
        s.final_gold = player.gold;
        s.final_stage = world.stage;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::BalanceConfig;
    use crate::items::{Item, ItemBase};
    use crate::world::create_world;

    fn fixtures() -> (Player, World) {
        let config = BalanceConfig::default();
        (Player::new(&config), create_world(&config))
    }

    fn combat_win(drop: Option<&str>) -> TurnStatistics {
        TurnStatistics {
            encounter: Some(EncounterKind::Combat),
            success: true,
            success_chance_combat: 0.8,
            death_chance: 0.1,
            xp_earned: 25,
            gold_earned: 12.0,
            drop_id: drop.map(str::to_string),
            ..Default::default()
        }
    }

    fn non_combat(category: OutcomeCategory, success: bool) -> TurnStatistics {
        TurnStatistics {
            encounter: Some(EncounterKind::NonCombat),
            success,
            outcome_category: Some(category),
            xp_earned: 6,
            gold_earned: -2.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let (player, world) = fixtures();
        let mut recorder = CsvRecorder::new(Vec::new());
        recorder
            .record_turn(0, &player, &world, &combat_win(Some("sword-10")))
            .unwrap();
        recorder
            .record_turn(1, &player, &world, &non_combat(OutcomeCategory::Trade, false))
            .unwrap();
        recorder.finish().unwrap();

        let text = String::from_utf8(recorder.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);

        let columns = CSV_HEADER.split(',').count();
        assert_eq!(lines[1].split(',').count(), columns);
        assert!(lines[1].starts_with("0,0,1,1,0,0,0,combat,true,"));
        assert!(lines[1].contains(",sword-10,"));
        assert!(lines[2].contains(",non_combat,false,"));
        assert!(lines[2].contains(",Trade,"));
    }

    #[test]
    fn test_json_lines_round_trip_record() {
        let (player, world) = fixtures();
        let mut recorder = JsonLinesRecorder::new(Vec::new());
        recorder.start_session(3).unwrap();
        recorder
            .record_turn(7, &player, &world, &combat_win(None))
            .unwrap();

        let text = String::from_utf8(recorder.into_inner()).unwrap();
        let record: TurnRecord = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(record.session, 3);
        assert_eq!(record.turn, 7);
        assert_eq!(record.stats, combat_win(None));
    }

    #[test]
    fn test_summary_counts() {
        let (mut player, world) = fixtures();
        let mut summary = SummaryRecorder::new();

        summary.record_turn(0, &player, &world, &combat_win(None)).unwrap();
        player.award_loot(Item::new(ItemBase::Bow, Rarity::Epic, 10));
        summary
            .record_turn(1, &player, &world, &combat_win(Some("bow-10")))
            .unwrap();
        summary
            .record_turn(2, &player, &world, &non_combat(OutcomeCategory::Stealth, true))
            .unwrap();
        summary
            .record_turn(3, &player, &world, &non_combat(OutcomeCategory::Stealth, false))
            .unwrap();

        let s = summary.current();
        assert_eq!(s.turns, 4);
        assert_eq!(s.combat_turns, 2);
        assert_eq!(s.combat_wins, 2);
        assert_eq!(s.drops, 1);
        assert_eq!(s.drops_by_rarity.get(&Rarity::Epic), Some(&1));
        assert_eq!(s.non_combat_successes, 1);
        assert_eq!(s.category_counts.get(&OutcomeCategory::Stealth), Some(&2));
        assert_eq!(s.total_xp_earned, 62);
        assert!((s.total_gold_earned - 19.0).abs() < 1e-9);
        assert!((s.combat_fraction() - 0.5).abs() < 1e-9);
        assert!((s.non_combat_success_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_summary_splits_sessions() {
        let (player, world) = fixtures();
        let mut summary = SummaryRecorder::new();

        summary.start_session(0).unwrap();
        summary.record_turn(0, &player, &world, &combat_win(None)).unwrap();
        summary.start_session(1).unwrap();
        summary.record_turn(0, &player, &world, &combat_win(None)).unwrap();
        summary.record_turn(1, &player, &world, &combat_win(None)).unwrap();

        let sessions = summary.into_summaries();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].turns, 1);
        assert_eq!(sessions[1].turns, 2);
    }

    #[test]
    fn test_empty_summary_has_no_sessions() {
        assert!(SummaryRecorder::new().into_summaries().is_empty());
    }

    #[test]
    fn test_tee_feeds_both() {
        let (player, world) = fixtures();
        let mut tee = Tee(MemoryRecorder::new(), Some(MemoryRecorder::new()));
        tee.record_turn(0, &player, &world, &combat_win(None)).unwrap();
        assert_eq!(tee.0.records.len(), 1);
        assert_eq!(tee.1.as_ref().map(|m| m.records.len()), Some(1));

        let mut absent: Option<MemoryRecorder> = None;
        assert!(absent.record_turn(0, &player, &world, &combat_win(None)).is_ok());
    }
}
