//! Tournament CLI
//!
//! Run a single-elimination tournament from a roster file and report on
//! saved results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tournament::{StrategyRegistry, Tournament, TournamentConfig, TournamentResults};

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Tic-tac-toe strategy tournament runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a full tournament and save the results
    Run {
        /// Roster and settings (TOML)
        #[arg(short, long, default_value = "tournament.toml")]
        config: PathBuf,
        /// Where to write the results JSON
        #[arg(short, long, default_value = "TournamentResults.json")]
        output: PathBuf,
        /// Override the board size from the config
        #[arg(long)]
        board_size: Option<usize>,
        /// Override the shuffle seed from the config
        #[arg(long)]
        seed: Option<u64>,
        /// Keep filler players in the pool after round 0
        #[arg(long)]
        advance_default_players: bool,
    },
    /// Print the report for a saved results file
    Report {
        results: PathBuf,
    },
    /// List the registered strategy ids
    Strategies,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            config,
            output,
            board_size,
            seed,
            advance_default_players,
        } => run_tournament(config, output, board_size, seed, advance_default_players),
        Command::Report { results } => show_report(results),
        Command::Strategies => {
            for id in StrategyRegistry::with_defaults().ids() {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn run_tournament(
    config_path: PathBuf,
    output: PathBuf,
    board_size: Option<usize>,
    seed: Option<u64>,
    advance_default_players: bool,
) -> Result<()> {
    let mut config = TournamentConfig::load(&config_path)
        .with_context(|| format!("loading roster from {}", config_path.display()))?;
    if let Some(size) = board_size {
        config.board_size = size;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.advance_default_players |= advance_default_players;

    info!(
        participants = config.participants.len(),
        board_size = config.board_size,
        "starting tournament"
    );

    let registry = StrategyRegistry::with_defaults();
    let mut tournament = Tournament::new(config, &registry).context("invalid roster")?;
    let results = tournament.run().context("tournament aborted")?;

    results
        .save(&output)
        .with_context(|| format!("saving results to {}", output.display()))?;
    info!(path = %output.display(), "results saved");

    results.print_report();
    Ok(())
}

fn show_report(path: PathBuf) -> Result<()> {
    let results = TournamentResults::load(&path)
        .with_context(|| format!("loading results from {}", path.display()))?;
    results.print_report();
    Ok(())
}
