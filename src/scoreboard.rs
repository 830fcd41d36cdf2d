//! Per-frame score report for a game.

use crate::{OutputFormat, ScorerConfig};
use derive_getters::Getters;
use serde::Serialize;
use strictly_bowling::{Game, Round, Score};
use tracing::instrument;

/// One row of the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct FrameLine {
    /// Frame number.
    round: Round,
    /// Score-sheet marks for the rolls in this frame.
    marks: String,
    /// Score of this frame alone.
    score: Score,
    /// Cumulative score through this frame.
    running_total: Score,
}

/// Snapshot of a game's scores.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Rows in frame order.
    frames: Vec<FrameLine>,
    /// Game total; undetermined while any frame is.
    total: Score,
    /// Whether the tenth frame is sealed.
    finished: bool,
}

impl Scoreboard {
    /// Builds the scoreboard for `game`.
    #[instrument(skip(game))]
    pub fn from_game(game: &Game) -> Self {
        let frames = game
            .chain()
            .frames()
            .zip(game.frame_scores())
            .zip(game.running_totals())
            .map(|(((_, frame), score), running_total)| FrameLine {
                round: frame.round(),
                marks: frame.marks(),
                score,
                running_total,
            })
            .collect();

        Self {
            frames,
            total: game.total(),
            finished: game.is_finished(),
        }
    }

    /// Renders the scoreboard in the configured format.
    #[instrument(skip(self, config))]
    pub fn render(&self, config: &ScorerConfig) -> Result<String, serde_json::Error> {
        match config.format() {
            OutputFormat::Text => Ok(self.render_text(*config.show_marks())),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Plain-text rendering, one line per frame.
    pub fn render_text(&self, show_marks: bool) -> String {
        let mut out = String::new();
        for line in &self.frames {
            if show_marks {
                out.push_str(&format!(
                    "{:>2} | {:<5} | {:>3} | {:>3}\n",
                    line.round, line.marks, line.score, line.running_total
                ));
            } else {
                out.push_str(&format!(
                    "{:>2} | {:>3} | {:>3}\n",
                    line.round, line.score, line.running_total
                ));
            }
        }
        let status = if self.finished { "final" } else { "in progress" };
        out.push_str(&format!("Total: {} ({})\n", self.total, status));
        out
    }
}
