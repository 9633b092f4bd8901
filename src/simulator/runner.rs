//! Multi-run simulation driver.

use super::config::SimConfig;
use super::recorder::{NullRecorder, Recorder, SummaryRecorder, Tee};
use super::report::SimReport;
use super::session::Session;
use crate::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    run_simulation_recorded(config, &mut NullRecorder)
}

/// Like [`run_simulation`], also streaming every turn of every run to `recorder`.
pub fn run_simulation_recorded(config: &SimConfig, recorder: &mut impl Recorder) -> Result<SimReport> {
    config.balance.validate()?;
    let mut sinks = Tee(SummaryRecorder::new(), recorder);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        sinks.start_session(run_idx)?;
        let mut session = Session::standard(config.balance.clone());
        session.run(config.turns_per_run, &mut sinks, &mut rng)?;

        if config.verbosity >= 2 {
            let s = sinks.0.current();
            tracing::info!(
                run = run_idx + 1,
                of = config.num_runs,
                level = s.final_level,
                gold = s.final_gold,
                stage = s.final_stage,
                combat_wins = s.combat_wins,
                deaths = s.deaths,
                drops = s.drops,
                "run complete"
            );
        }
    }

    sinks.finish()?;
    let Tee(summaries, _) = sinks;
    Ok(SimReport::from_runs(
        summaries.into_summaries(),
        config.turns_per_run,
    ))
}
