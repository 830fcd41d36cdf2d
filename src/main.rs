//! Strictly Bowling - command-line scorer

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_bowling::Game;
use strictly_bowling_cli::{Scoreboard, ScorerConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScorerConfig::from_file(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => ScorerConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Score {
            rolls,
            format,
            no_marks,
        } => {
            let config = match format {
                Some(format) => config.with_format(format),
                None => config,
            };
            let config = if no_marks {
                config.with_show_marks(false)
            } else {
                config
            };
            run_score(&rolls, &config)
        }
    }
}

/// Replays `rolls` and prints the scoreboard.
#[instrument(skip(config))]
fn run_score(rolls: &[i32], config: &ScorerConfig) -> Result<()> {
    let game = Game::replay(rolls).context("Replaying rolls")?;
    info!(frames = game.chain().len(), finished = game.is_finished(), "Game replayed");

    let board = Scoreboard::from_game(&game);
    let output = board.render(config).context("Rendering scoreboard")?;
    print!("{}", output);
    Ok(())
}
