//! Session balance simulator CLI.
//!
//! Run Monte Carlo sessions and print an aggregated balance report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 runs x 500 turns
//!   cargo run --bin simulate -- -n 20 -t 2000         # 20 long sessions
//!   cargo run --bin simulate -- --seed 42 --csv t.csv # reproducible, per-turn CSV
//!   cargo run --bin simulate -- --config balance.toml # custom tunables

use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use turnsim::simulator::{run_simulation_recorded, CsvRecorder, JsonLinesRecorder, SimConfig, Tee};
use turnsim::{BalanceConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "simulate", version, about = "Turn-based RPG session balance simulator")]
struct Cli {
    /// Number of independent sessions
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Turns per session
    #[arg(short, long, default_value_t = 500)]
    turns: u32,

    /// RNG seed; run i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with balance tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write every turn as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write every turn as JSON lines
    #[arg(long)]
    jsonl: Option<PathBuf>,

    /// Save the aggregated report as JSON
    #[arg(long)]
    json: bool,

    /// Per-run and per-turn logging
    #[arg(short, long)]
    verbose: bool,

    /// Quick check: 20 runs x 100 turns
    #[arg(long)]
    quick: bool,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        let balance = match &self.config {
            Some(path) => BalanceConfig::load(path)?,
            None => BalanceConfig::default(),
        };
        let mut config = if self.quick {
            SimConfig::quick_check()
        } else {
            SimConfig {
                num_runs: self.runs,
                turns_per_run: self.turns,
                ..Default::default()
            }
        };
        config.seed = self.seed;
        config.verbosity = if self.verbose { 2 } else { 1 };
        config.balance = balance;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.sim_config()?;

    tracing::info!(
        runs = config.num_runs,
        turns = config.turns_per_run,
        seed = ?config.seed,
        combat_chance = config.balance.combat_chance,
        "running simulation"
    );

    let csv = cli
        .csv
        .as_ref()
        .map(|path| File::create(path).map(|f| CsvRecorder::new(BufWriter::new(f))))
        .transpose()?;
    let jsonl = cli
        .jsonl
        .as_ref()
        .map(|path| File::create(path).map(|f| JsonLinesRecorder::new(BufWriter::new(f))))
        .transpose()?;

    let mut sinks = Tee(csv, jsonl);
    let report = run_simulation_recorded(&config, &mut sinks)?;

    println!("{}", report.to_text());

    if let Some(path) = &cli.csv {
        println!("Per-turn CSV saved to: {}", path.display());
    }
    if let Some(path) = &cli.jsonl {
        println!("Per-turn JSON lines saved to: {}", path.display());
    }

    if cli.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
