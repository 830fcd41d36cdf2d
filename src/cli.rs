//! Command-line interface for the bowling scorer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_bowling_cli::OutputFormat;

/// Strictly Bowling - ten-pin bowling scorer
#[derive(Parser, Debug)]
#[command(name = "bowling-score")]
#[command(about = "Scores ten-pin bowling games frame by frame", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a sequence of rolls and print the scoreboard
    Score {
        /// Pins knocked down by each roll, in order
        #[arg(required = true, allow_negative_numbers = true)]
        rolls: Vec<i32>,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Hide score-sheet marks
        #[arg(long)]
        no_marks: bool,
    },
}
