//! Simulation configuration.

use crate::core::balance::BalanceConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Turns played in every session
    pub turns_per_run: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,

    /// Tunables handed to every session
    pub balance: BalanceConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            turns_per_run: 500,
            verbosity: 1,
            balance: BalanceConfig::default(),
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance sanity check
    pub fn quick_check() -> Self {
        Self {
            num_runs: 20,
            turns_per_run: 100,
            ..Default::default()
        }
    }

    /// Few runs, many turns: late-stage pacing
    pub fn long_session() -> Self {
        Self {
            num_runs: 10,
            turns_per_run: 5_000,
            ..Default::default()
        }
    }
}
