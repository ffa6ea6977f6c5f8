//! tictac - terminal tic-tac-toe and fuzzy option picker.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tictac::cli::{Cli, Command};
use tictac::{pick, play};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Command::Play { moves: Some(moves) } => {
            info!(moves = moves.len(), "Replaying moves");
            play::replay(&moves, &mut out)?;
        }
        Command::Play { moves: None } => {
            info!("Starting interactive game");
            play::interactive(io::stdin().lock(), &mut out)?;
        }
        Command::Pick {
            config,
            down,
            query,
        } => pick::run(&config, &query, down, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
