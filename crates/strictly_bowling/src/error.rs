//! Error types for bowling scoring.

use crate::Round;
use derive_more::{Display, Error};
use tracing::instrument;

/// Specific error conditions raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BowlingErrorKind {
    /// Pin count outside 0..=10, or a frame total above ten.
    #[display("Invalid pin count: {}", _0)]
    InvalidPinCount(i32),

    /// Round number outside 1..=10.
    #[display("Invalid round: {}", _0)]
    InvalidRound(i32),

    /// Determined score with a negative total.
    #[display("Invalid score: {}", _0)]
    InvalidScore(i32),

    /// The frame has no roll slots left.
    #[display("Cannot bowl: frame {} is closed", _0)]
    CannotBowl(Round),

    /// The frame id does not belong to this chain.
    #[display("Unknown frame: {}", _0)]
    UnknownFrame(usize),

    /// The final frame is sealed; the game accepts no more rolls.
    #[display("Game is already over")]
    GameOver,
}

/// Bowling error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Bowling error: {} at {}:{}", kind, file, line)]
pub struct BowlingError {
    /// What went wrong.
    pub kind: BowlingErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BowlingError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BowlingErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BowlingErrorKind {
        &self.kind
    }
}

impl From<BowlingErrorKind> for BowlingError {
    #[track_caller]
    fn from(kind: BowlingErrorKind) -> Self {
        Self::new(kind)
    }
}
