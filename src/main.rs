//! Batch driver for the whodunit puzzle generator.
//!
//! Runs a number of independent games on consecutive seeds and prints each
//! finished game record as one JSON document on stdout. A single game's fault
//! never aborts the batch: it is logged and the driver moves on to the next
//! seed. A short summary goes to stderr at the end.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use whodunit_gen::puzzle::{generate_game, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "whodunit-gen", version, about = "Generate whodunit logic puzzles with SAT-verified unique solutions")]
struct Args {
    /// Number of games to generate.
    #[arg(long, default_value_t = 10)]
    games: u64,

    /// Seed of the first game; game i runs on seed_start + i.
    #[arg(long, default_value_t = 0)]
    seed_start: u64,

    /// Path to a JSON configuration file; the built-in configuration is used
    /// when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON records.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {e}", path.display()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        error!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let mut faults = 0u64;
    let mut proposition_counts = Vec::new();

    for i in 0..args.games {
        let seed = args.seed_start + i;
        match generate_game(config.clone(), Some(seed)) {
            Ok(record) => {
                let json = if args.pretty {
                    serde_json::to_string_pretty(&record)
                } else {
                    serde_json::to_string(&record)
                };
                match json {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!(seed, "serialization failed: {e}");
                        faults += 1;
                        continue;
                    }
                }
                proposition_counts.push(record.propositions.len());
            }
            Err(e) => {
                // Record the fault and continue with the next seed.
                error!(seed, "game failed: {e}");
                faults += 1;
            }
        }
    }

    let converged = proposition_counts.len();
    eprintln!(
        "generated {converged}/{} games ({faults} faults)",
        args.games
    );
    if let (Some(&min), Some(&max)) = (
        proposition_counts.iter().min(),
        proposition_counts.iter().max(),
    ) {
        let total: usize = proposition_counts.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let avg = total as f64 / converged as f64;
        eprintln!("propositions per game: min {min}, avg {avg:.1}, max {max}");
    }

    if converged == 0 && args.games > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
