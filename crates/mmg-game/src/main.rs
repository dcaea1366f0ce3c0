//! Market-Making Game - Entry Point
//!
//! Quote against a market-making bot on a simulated stock for a fixed
//! number of rounds.

use anyhow::Result;
use clap::Parser;
use mmg_core::Difficulty;
use mmg_game::ConfigSource;
use tracing::{info, warn};

/// Market-making game against a bot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via MMG_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Difficulty level: 1 = easy, 2 = medium, 3 = hard
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    difficulty: Option<u8>,

    /// Number of rounds to play
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: Option<u32>,

    /// Seed for a reproducible price path
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the price chart at the end of the game
    #[arg(long)]
    no_chart: bool,

    /// Print Prometheus metrics after the game
    #[arg(long)]
    print_metrics: bool,

    /// Print the game summary as JSON after the game
    #[arg(long)]
    json_summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config path: CLI arg > MMG_CONFIG env var > default
    let (config, source) = match &args.config {
        Some(path) => (
            mmg_game::AppConfig::from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => mmg_game::AppConfig::load()?,
    };

    // The log filter comes from the config, so logging starts after loading
    mmg_telemetry::init_logging(&config.telemetry.log_level)?;
    info!("Starting market-making game v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        ConfigSource::File(path) => info!(config_path = %path, "Configuration loaded"),
        ConfigSource::Defaults { missing } => {
            warn!(path = %missing, "Config file not found, using defaults")
        }
    }

    let options = mmg_game::RunOptions {
        difficulty: args.difficulty.map(Difficulty::try_from).transpose()?,
        rounds: args.rounds,
        seed: args.seed,
        no_chart: args.no_chart,
        print_metrics: args.print_metrics,
        json_summary: args.json_summary,
    };

    let app = mmg_game::Application::new(config, options);
    let summary = app.run()?;
    info!(outcome = %summary.outcome, profit = %summary.profit, "Game finished");

    Ok(())
}
