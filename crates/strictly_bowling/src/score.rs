//! Frame scores that may not be known yet.

use crate::{BowlingError, BowlingErrorKind, PinCount};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Score of a frame, or of a run of frames.
///
/// A strike or spare cannot be scored until its bonus rolls have been
/// bowled, so a score is either undetermined or a non-negative total.
/// Undetermined is distinct from zero: a gutter frame scores `Score::of(0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(Option<u32>);

impl Score {
    /// A determined score of zero.
    pub const ZERO: Score = Score(Some(0));

    /// The undetermined score.
    pub fn of_null() -> Self {
        Self(None)
    }

    /// A determined score.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidScore`] if `total` is negative.
    #[track_caller]
    #[instrument]
    pub fn of(total: i32) -> Result<Self, BowlingError> {
        u32::try_from(total).map(|total| Self(Some(total))).map_err(|_| {
            warn!(total, "Rejected score");
            BowlingError::new(BowlingErrorKind::InvalidScore(total))
        })
    }

    /// Adds two scores; the result is undetermined if either side is.
    pub fn add(self, other: Score) -> Score {
        Score(
            self.0
                .zip(other.0)
                .and_then(|(left, right)| left.checked_add(right)),
        )
    }

    /// Returns the total, if determined.
    pub fn value(self) -> Option<u32> {
        self.0
    }

    /// True when the score is known.
    pub fn is_determined(self) -> bool {
        self.0.is_some()
    }
}

impl From<PinCount> for Score {
    fn from(pins: PinCount) -> Self {
        Self(Some(u32::from(pins.value())))
    }
}

impl std::ops::Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score::add(self, other)
    }
}

impl std::iter::Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Self {
        iter.fold(Score::ZERO, Score::add)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(total) => std::fmt::Display::fmt(&total, f),
            None => f.pad("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_zero() {
        assert_ne!(Score::of_null(), Score::of(0).unwrap());
        assert_eq!(Score::of_null(), Score::of_null());
        assert_eq!(Score::of(0).unwrap(), Score::ZERO);
    }

    #[test]
    fn test_negative_total_rejected() {
        let err = Score::of(-1).unwrap_err();
        assert_eq!(err.kind(), &BowlingErrorKind::InvalidScore(-1));
    }

    #[test]
    fn test_large_total_accepted() {
        let total = Score::of(70_000).unwrap();
        assert_eq!(total.value(), Some(70_000));
        assert_eq!(Score::of(i32::MAX).unwrap().value(), Some(2_147_483_647));
    }

    #[test]
    fn test_addition_propagates_null() {
        let eight = Score::of(8).unwrap();
        let five = Score::of(5).unwrap();

        assert_eq!(eight + five, Score::of(13).unwrap());
        assert_eq!(eight + Score::of_null(), Score::of_null());
        assert_eq!(Score::of_null().add(five), Score::of_null());
    }

    #[test]
    fn test_sum_over_frames() {
        let total: Score = [3, 4, 5].iter().map(|&s| Score::of(s).unwrap()).sum();
        assert_eq!(total.value(), Some(12));

        let pending: Score = [Score::of(3).unwrap(), Score::of_null()].into_iter().sum();
        assert!(!pending.is_determined());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::of(30).unwrap().to_string(), "30");
        assert_eq!(Score::of_null().to_string(), "-");
        assert_eq!(format!("{:>3}", Score::of_null()), "  -");
        assert_eq!(format!("{:>3}", Score::of(7).unwrap()), "  7");
    }
}
