//! Strictly Bowling - ten-pin bowling scoring logic
//!
//! Frames are state machines that accept rolls one at a time. A frame that
//! seals on a strike or spare links forward to the frame created after it,
//! and its score stays undetermined until enough later rolls exist.
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{FrameChain, PinCount, Score};
//!
//! # fn main() -> Result<(), strictly_bowling::BowlingError> {
//! let mut chain = FrameChain::initialize();
//! let first = chain.head();
//!
//! chain.roll(first, PinCount::of(0)?)?;
//! let second = chain.roll(first, PinCount::of(10)?)?;
//! assert_eq!(chain.calculate_score(first)?, Score::of_null());
//!
//! chain.roll(second, PinCount::of(3)?)?;
//! assert_eq!(chain.calculate_score(first)?, Score::of(13)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod frame;
mod game;
mod pin_count;
mod round;
mod score;

pub use error::{BowlingError, BowlingErrorKind};
pub use frame::{
    FinalFrameNode, FinalFrameState, FrameChain, FrameId, FrameNode, NormalFrameNode,
    NormalFrameState, SealedFrame,
};
pub use game::Game;
pub use pin_count::PinCount;
pub use round::Round;
pub use score::Score;
