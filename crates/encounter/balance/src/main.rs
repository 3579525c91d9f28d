//! Balance tooling for the encounter rules.
//!
//! Run with: `cargo run -p encounter-balance -- <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Batch, Run, Snapshot};

/// Encounter balance tooling
#[derive(Parser)]
#[command(name = "encounter-balance")]
#[command(about = "Simulate encounters and aggregate agent results", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play one encounter and print its result as JSON
    Run(Run),

    /// Play many encounters per agent and summarise them
    Batch(Batch),

    /// Play a few turns and print the encounter snapshot
    Snapshot(Snapshot),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (BALANCE_* overrides, RUST_LOG)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Batch(cmd) => cmd.execute().await,
        Command::Snapshot(cmd) => cmd.execute(),
    }
}
