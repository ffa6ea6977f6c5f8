//! Command-line interface for tictac.

use clap::{Parser, Subcommand};

/// Tic-tac-toe and a fuzzy option picker in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe and a fuzzy option picker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe
    ///
    /// Without --moves, reads one position per line from stdin
    /// (0-8 or a label such as "center"); "reset" starts over.
    Play {
        /// Comma-separated positions to play in order
        #[arg(short, long, value_delimiter = ',')]
        moves: Option<Vec<usize>>,
    },

    /// Search the configured options and show highlighted matches
    Pick {
        /// Path to the picker config file
        #[arg(short, long, default_value = "picker.toml")]
        config: std::path::PathBuf,

        /// Move the highlight down this many rows before selecting
        #[arg(short, long, default_value = "0")]
        down: usize,

        /// Search text (blank shows the first options)
        #[arg(default_value = "")]
        query: String,
    },
}
