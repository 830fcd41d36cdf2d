//! A single player's game, driven roll by roll.

use crate::{BowlingError, BowlingErrorKind, FrameChain, FrameId, FrameNode, PinCount, Round, Score};
use tracing::{debug, info, instrument, warn};

/// Feeds rolls to whichever frame is current and reports scores.
///
/// Wraps a [`FrameChain`]: every roll goes to the frame returned by the
/// previous roll, so a sealed frame is never bowled at again.
#[derive(Debug)]
pub struct Game {
    chain: FrameChain,
    current: FrameId,
    rolls: Vec<PinCount>,
}

impl Game {
    /// Creates a game at the first frame.
    #[instrument]
    pub fn new() -> Self {
        let chain = FrameChain::initialize();
        let current = chain.head();
        Self {
            chain,
            current,
            rolls: Vec::new(),
        }
    }

    /// Bowls one roll.
    ///
    /// Returns the frame that will take the next roll.
    ///
    /// # Errors
    ///
    /// - [`BowlingErrorKind::GameOver`] after the tenth frame seals
    /// - [`BowlingErrorKind::InvalidPinCount`] for an impossible roll
    #[instrument(skip(self), fields(round = %self.current_round()))]
    pub fn roll(&mut self, pins: i32) -> Result<FrameId, BowlingError> {
        if self.is_finished() {
            warn!(pins, "Roll after final frame");
            return Err(BowlingError::new(BowlingErrorKind::GameOver));
        }

        let pins = PinCount::of(pins)?;
        self.current = self.chain.roll(self.current, pins)?;
        self.rolls.push(pins);

        if self.is_finished() {
            info!(total = %self.total(), "Game finished");
        } else {
            debug!(next_round = %self.current_round(), "Roll recorded");
        }
        Ok(self.current)
    }

    /// Builds a game from a sequence of rolls.
    ///
    /// # Errors
    ///
    /// Returns the error of the first roll that is rejected.
    #[instrument]
    pub fn replay(rolls: &[i32]) -> Result<Self, BowlingError> {
        let mut game = Self::new();
        for &pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// True once the tenth frame is sealed.
    pub fn is_finished(&self) -> bool {
        self.current_frame()
            .is_some_and(|frame| frame.is_final() && frame.is_sealed())
    }

    /// Frame that takes the next roll.
    pub fn current(&self) -> FrameId {
        self.current
    }

    /// Round of the current frame.
    pub fn current_round(&self) -> Round {
        self.current_frame()
            .map(FrameNode::round)
            .unwrap_or_else(Round::first)
    }

    /// The underlying frame chain.
    pub fn chain(&self) -> &FrameChain {
        &self.chain
    }

    /// Every accepted roll, in order.
    pub fn rolls(&self) -> &[PinCount] {
        &self.rolls
    }

    /// Score of each frame created so far.
    #[instrument(skip(self))]
    pub fn frame_scores(&self) -> Vec<Score> {
        self.chain
            .frames()
            .map(|(_, frame)| frame.calculate_score(&self.chain))
            .collect()
    }

    /// Cumulative score after each frame; undetermined from the first
    /// frame still waiting on rolls.
    #[instrument(skip(self))]
    pub fn running_totals(&self) -> Vec<Score> {
        self.frame_scores()
            .into_iter()
            .scan(Score::ZERO, |total, score| {
                *total = *total + score;
                Some(*total)
            })
            .collect()
    }

    /// Score of the whole game so far; undetermined while any frame is.
    pub fn total(&self) -> Score {
        self.frame_scores().into_iter().sum()
    }

    fn current_frame(&self) -> Option<&FrameNode> {
        self.chain.frame(self.current)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
