//! TANKWAR CLI - Bot decision harness
//!
//! Commands:
//! - decide: one decision tick for every bot tank in a scenario
//! - simulate: repeated ticks with naive movement
//! - export: write the built-in demo assets to disk

mod decide;
mod export;
mod scenario;
mod simulate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tankwar")]
#[command(about = "Tile-arena bot tank decision harness")]
struct Cli {
    /// RNG seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one decision tick for every bot tank
    Decide(decide::DecideArgs),
    /// Run repeated decision ticks with naive movement
    Simulate(simulate::SimulateArgs),
    /// Write the built-in demo assets to disk
    Export(export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decide(args) => decide::run(args, cli.seed),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
        Commands::Export(args) => export::run(args),
    }
}
