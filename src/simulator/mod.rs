//! Turn engine and Monte Carlo balance simulator.
//!
//! Each turn the [`Session`] draws combat vs non-combat, hands the player and
//! the current world to exactly one resolver, replaces the world with the
//! next story snapshot, and emits the turn's [`TurnStatistics`] to a
//! [`Recorder`]. [`run_simulation`] repeats that over many seeded sessions
//! and folds the results into a [`SimReport`].

mod combat;
mod config;
mod context;
mod non_combat;
mod recorder;
mod report;
mod runner;
mod session;
mod statistics;

pub use combat::resolve_combat;
pub use config::SimConfig;
pub use context::TurnContext;
pub use non_combat::resolve_non_combat;
pub use recorder::{
    CsvRecorder, JsonLinesRecorder, MemoryRecorder, NullRecorder, Recorder, SessionSummary,
    SummaryRecorder, Tee, TurnRecord, CSV_HEADER,
};
pub use report::SimReport;
pub use runner::{run_simulation, run_simulation_recorded};
pub use session::{simulate, Session};
pub use statistics::{EncounterKind, TurnStatistics};
