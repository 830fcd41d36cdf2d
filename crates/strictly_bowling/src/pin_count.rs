//! Validated pin counts.

use crate::{BowlingError, BowlingErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of pins knocked down by a single roll (0-10).
///
/// Construction goes through [`PinCount::of`], so a value of this type
/// always lies within a rack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "u8")]
pub struct PinCount(u8);

impl PinCount {
    /// Pins in a full rack.
    pub const MAX_PIN: u8 = 10;

    /// Fewest pins a roll can knock down.
    pub const MIN_PIN: u8 = 0;

    /// A roll that clears the rack.
    pub const STRIKE: PinCount = PinCount(Self::MAX_PIN);

    /// A roll that knocks nothing down.
    pub const GUTTER: PinCount = PinCount(Self::MIN_PIN);

    /// Validates a raw pin count.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidPinCount`] if `value` is outside
    /// `MIN_PIN..=MAX_PIN`.
    #[track_caller]
    #[instrument]
    pub fn of(value: i32) -> Result<Self, BowlingError> {
        if !(i32::from(Self::MIN_PIN)..=i32::from(Self::MAX_PIN)).contains(&value) {
            warn!(value, "Rejected pin count");
            return Err(BowlingError::new(BowlingErrorKind::InvalidPinCount(value)));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| BowlingError::new(BowlingErrorKind::InvalidPinCount(value)))
    }

    /// Total of two rolls bowled at the same rack.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::InvalidPinCount`] if the rolls knock down
    /// more pins than the rack holds.
    #[track_caller]
    #[instrument]
    pub fn frame_total(first: PinCount, second: PinCount) -> Result<Self, BowlingError> {
        Self::of(i32::from(first.0) + i32::from(second.0))
    }

    /// Returns the raw number of pins.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True when every pin went down.
    pub fn is_strike(self) -> bool {
        self.0 == Self::MAX_PIN
    }

    /// Pins still standing after this roll on a fresh rack.
    pub fn remaining(self) -> PinCount {
        PinCount(Self::MAX_PIN - self.0)
    }
}

impl TryFrom<i32> for PinCount {
    type Error = BowlingError;

    #[track_caller]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<PinCount> for u8 {
    fn from(pins: PinCount) -> Self {
        pins.0
    }
}

impl std::fmt::Display for PinCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
