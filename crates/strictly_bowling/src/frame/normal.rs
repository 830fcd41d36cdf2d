//! Frames one through nine.

use super::{FinalFrameNode, FrameChain, FrameId, FrameNode, RollOutcome};
use crate::{BowlingError, BowlingErrorKind, PinCount, Round, Score};
use tracing::{debug, instrument, warn};

/// How a normal frame was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum SealedFrame {
    /// Ten pins on the first roll.
    Strike,
    /// Ten pins across both rolls.
    Spare {
        /// First roll.
        first: PinCount,
        /// Roll that cleared the rack.
        second: PinCount,
    },
    /// Pins left standing after both rolls.
    Miss {
        /// First roll.
        first: PinCount,
        /// Second roll.
        second: PinCount,
    },
}

impl SealedFrame {
    /// Number of later rolls this frame counts as bonus.
    pub fn bonus_rolls_owed(self) -> usize {
        match self {
            SealedFrame::Strike => 2,
            SealedFrame::Spare { .. } => 1,
            SealedFrame::Miss { .. } => 0,
        }
    }

    fn rolls(self) -> Vec<PinCount> {
        match self {
            SealedFrame::Strike => vec![PinCount::STRIKE],
            SealedFrame::Spare { first, second } | SealedFrame::Miss { first, second } => {
                vec![first, second]
            }
        }
    }
}

/// Roll state of a normal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum NormalFrameState {
    /// No rolls yet.
    Empty,
    /// One roll, pins still standing.
    OneRollOpen {
        /// First roll.
        first: PinCount,
    },
    /// No further rolls accepted.
    Sealed(SealedFrame),
}

/// A frame in rounds one through nine.
///
/// Strikes and spares are scored with rolls recorded on later frames, so a
/// sealed frame keeps the id of the frame created for the next round. The
/// link is written by [`FrameChain::roll`], the only way to bowl at a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalFrameNode {
    round: Round,
    state: NormalFrameState,
    next: Option<FrameId>,
}

impl NormalFrameNode {
    /// Empty frame for the first round.
    #[instrument]
    pub fn initialize() -> Self {
        Self {
            round: Round::first(),
            state: NormalFrameState::Empty,
            next: None,
        }
    }

    /// Empty frame for `round`.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidRound`] for the final round, which
    /// is bowled on a [`FinalFrameNode`].
    #[track_caller]
    #[instrument]
    pub fn of(round: Round) -> Result<Self, BowlingError> {
        if round.is_final() {
            return Err(BowlingError::new(BowlingErrorKind::InvalidRound(i32::from(
                round.number(),
            ))));
        }
        Ok(Self {
            round,
            state: NormalFrameState::Empty,
            next: None,
        })
    }

    /// Records a roll.
    ///
    /// Returns `RollOutcome::Current` while the frame stays open, or
    /// `RollOutcome::Next` carrying the frame for the following round once
    /// this one seals. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`BowlingErrorKind::CannotBowl`] if the frame is sealed
    /// - [`BowlingErrorKind::InvalidPinCount`] if both rolls exceed the rack
    #[instrument(skip(self, pins), fields(round = %self.round, pins = %pins))]
    pub(crate) fn roll(&mut self, pins: PinCount) -> Result<RollOutcome, BowlingError> {
        let state = match self.state {
            NormalFrameState::Empty if pins.is_strike() => {
                NormalFrameState::Sealed(SealedFrame::Strike)
            }
            NormalFrameState::Empty => NormalFrameState::OneRollOpen { first: pins },
            NormalFrameState::OneRollOpen { first } => {
                let total = PinCount::frame_total(first, pins)?;
                if total.is_strike() {
                    NormalFrameState::Sealed(SealedFrame::Spare { first, second: pins })
                } else {
                    NormalFrameState::Sealed(SealedFrame::Miss { first, second: pins })
                }
            }
            NormalFrameState::Sealed(_) => {
                warn!("Roll on sealed frame");
                return Err(BowlingError::new(BowlingErrorKind::CannotBowl(self.round)));
            }
        };

        if !state.is_sealed() {
            debug!("Frame open");
            self.state = state;
            return Ok(RollOutcome::Current);
        }

        let next = self.following_frame()?;
        self.state = state;
        debug!(state = ?self.state, next_round = %next.round(), "Frame sealed");
        Ok(RollOutcome::Next(next))
    }

    /// Score of this frame, looking up bonus rolls through `chain`.
    ///
    /// Undetermined while the frame is open, or while a strike or spare is
    /// still waiting on its bonus rolls.
    #[instrument(skip(self, chain), fields(round = %self.round))]
    pub(crate) fn calculate_score(&self, chain: &FrameChain) -> Score {
        let NormalFrameState::Sealed(sealed) = self.state else {
            return Score::of_null();
        };

        let own: Score = sealed.rolls().into_iter().map(Score::from).sum();
        match chain.bonus_rolls(self.next, sealed.bonus_rolls_owed()) {
            Some(bonus) => own + bonus.into_iter().map(Score::from).sum::<Score>(),
            None => Score::of_null(),
        }
    }

    /// Round this frame belongs to.
    pub fn round(&self) -> Round {
        self.round
    }

    /// Current roll state.
    pub fn state(&self) -> NormalFrameState {
        self.state
    }

    /// Frame created when this one sealed.
    pub fn next(&self) -> Option<FrameId> {
        self.next
    }

    /// Rolls recorded so far, in order.
    pub fn rolls(&self) -> Vec<PinCount> {
        match self.state {
            NormalFrameState::Empty => Vec::new(),
            NormalFrameState::OneRollOpen { first } => vec![first],
            NormalFrameState::Sealed(sealed) => sealed.rolls(),
        }
    }

    /// True once no further rolls are accepted.
    pub fn is_sealed(&self) -> bool {
        self.state.is_sealed()
    }

    pub(super) fn link(&mut self, next: FrameId) {
        debug_assert!(self.next.is_none(), "Forward link written twice");
        debug!(round = %self.round, next = %next, "Linked next frame");
        self.next = Some(next);
    }

    #[track_caller]
    fn following_frame(&self) -> Result<FrameNode, BowlingError> {
        let round = self.round.next()?;
        if round.is_final() {
            Ok(FrameNode::Final(FinalFrameNode::new()))
        } else {
            Ok(FrameNode::Normal(NormalFrameNode::of(round)?))
        }
    }
}

impl Default for NormalFrameNode {
    fn default() -> Self {
        Self::initialize()
    }
}
