//! The tenth frame.

use super::RollOutcome;
use crate::{BowlingError, BowlingErrorKind, PinCount, Round, Score};
use tracing::{debug, instrument, warn};

/// Most rolls the tenth frame can hold.
const MAX_ROLLS: usize = 3;

/// Roll state of the tenth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum FinalFrameState {
    /// No rolls yet.
    Empty,
    /// One roll recorded.
    OneRoll,
    /// Strike or spare in the first two rolls; the fill ball is pending.
    TwoRolls,
    /// No further rolls accepted.
    Sealed {
        /// Whether a third roll was bowled.
        third_granted: bool,
    },
}

/// Frame ten: up to three rolls, scored without looking at other frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalFrameNode {
    rolls: Vec<PinCount>,
}

impl FinalFrameNode {
    /// Empty tenth frame.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rolls: Vec::with_capacity(MAX_ROLLS),
        }
    }

    /// Records a roll. The tenth frame is always the current frame.
    ///
    /// A strike on the first roll or a spare on the first two re-racks the
    /// pins and grants a third roll; otherwise the frame seals after two.
    ///
    /// # Errors
    ///
    /// - [`BowlingErrorKind::CannotBowl`] once the frame is sealed
    /// - [`BowlingErrorKind::InvalidPinCount`] if the roll knocks down more
    ///   pins than are standing
    #[instrument(skip(self, pins), fields(rolls = self.rolls.len(), pins = %pins))]
    pub(crate) fn roll(&mut self, pins: PinCount) -> Result<RollOutcome, BowlingError> {
        if self.state().is_sealed() {
            warn!("Roll on sealed final frame");
            return Err(BowlingError::new(BowlingErrorKind::CannotBowl(
                Round::last(),
            )));
        }

        if let Some(standing) = self.standing_rack() {
            PinCount::frame_total(standing, pins)?;
        }

        self.rolls.push(pins);
        debug!(state = ?self.state(), "Final frame roll recorded");
        Ok(RollOutcome::Current)
    }

    /// Sum of all rolls once the frame is sealed, undetermined before.
    #[instrument(skip(self))]
    pub fn calculate_score(&self) -> Score {
        if !self.state().is_sealed() {
            return Score::of_null();
        }
        self.rolls.iter().copied().map(Score::from).sum()
    }

    /// Current roll state.
    pub fn state(&self) -> FinalFrameState {
        match self.rolls.as_slice() {
            [] => FinalFrameState::Empty,
            [_] => FinalFrameState::OneRoll,
            [first, second] if Self::grants_third(*first, *second) => FinalFrameState::TwoRolls,
            [_, _] => FinalFrameState::Sealed {
                third_granted: false,
            },
            _ => FinalFrameState::Sealed {
                third_granted: true,
            },
        }
    }

    /// Always the final round.
    pub fn round(&self) -> Round {
        Round::last()
    }

    /// Rolls recorded so far, in order.
    pub fn rolls(&self) -> &[PinCount] {
        &self.rolls
    }

    /// True once no further rolls are accepted.
    pub fn is_sealed(&self) -> bool {
        self.state().is_sealed()
    }

    fn grants_third(first: PinCount, second: PinCount) -> bool {
        first.is_strike()
            || PinCount::frame_total(first, second).is_ok_and(PinCount::is_strike)
    }

    /// The roll whose pins are still partly standing, if the next roll is
    /// bowled at a partial rack.
    fn standing_rack(&self) -> Option<PinCount> {
        match self.rolls.as_slice() {
            [first] if !first.is_strike() => Some(*first),
            [first, second] if first.is_strike() && !second.is_strike() => Some(*second),
            _ => None,
        }
    }
}

impl Default for FinalFrameNode {
    fn default() -> Self {
        Self::new()
    }
}
