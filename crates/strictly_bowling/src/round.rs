//! Frame numbers within a game.

use crate::{BowlingError, BowlingErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of the frame being bowled (1-10).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "u8")]
pub struct Round(u8);

impl Round {
    /// Opening frame.
    pub const FIRST_ROUND: u8 = 1;

    /// Tenth frame, scored under its own rules.
    pub const FINAL_ROUND: u8 = 10;

    /// Step between consecutive frames.
    pub const ROUND_UNIT: u8 = 1;

    /// Validates a raw frame number.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidRound`] outside
    /// `FIRST_ROUND..=FINAL_ROUND`.
    #[track_caller]
    #[instrument]
    pub fn of(number: i32) -> Result<Self, BowlingError> {
        if !(i32::from(Self::FIRST_ROUND)..=i32::from(Self::FINAL_ROUND)).contains(&number) {
            warn!(number, "Rejected round");
            return Err(BowlingError::new(BowlingErrorKind::InvalidRound(number)));
        }
        u8::try_from(number)
            .map(Self)
            .map_err(|_| BowlingError::new(BowlingErrorKind::InvalidRound(number)))
    }

    /// The opening frame.
    pub fn first() -> Self {
        Self(Self::FIRST_ROUND)
    }

    /// The tenth frame.
    pub fn last() -> Self {
        Self(Self::FINAL_ROUND)
    }

    /// The frame after this one.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidRound`] when called on the final round.
    #[track_caller]
    #[instrument]
    pub fn next(self) -> Result<Self, BowlingError> {
        Self::of(i32::from(self.0) + i32::from(Self::ROUND_UNIT))
    }

    /// Returns the frame number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// True for the tenth frame.
    pub fn is_final(self) -> bool {
        self.0 == Self::FINAL_ROUND
    }
}

impl TryFrom<i32> for Round {
    type Error = BowlingError;

    #[track_caller]
    fn try_from(number: i32) -> Result<Self, Self::Error> {
        Self::of(number)
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.0
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Round::of(0).is_err());
        assert!(Round::of(11).is_err());
        assert_eq!(Round::of(1).unwrap(), Round::first());
        assert_eq!(Round::of(10).unwrap(), Round::last());
    }

    #[test]
    fn test_next_walks_to_final() {
        let mut round = Round::first();
        for expected in 2..=10 {
            round = round.next().expect("Round before final");
            assert_eq!(round.number(), expected);
        }
        assert!(round.is_final());

        let err = round.next().unwrap_err();
        assert_eq!(err.kind(), &BowlingErrorKind::InvalidRound(11));
    }

    #[test]
    fn test_round_before_final() {
        let ninth = Round::of(i32::from(Round::FINAL_ROUND - Round::ROUND_UNIT)).unwrap();
        assert!(!ninth.is_final());
        assert!(ninth.next().unwrap().is_final());
    }
}
