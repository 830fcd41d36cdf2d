//! Frame state machines and the chain that links them.

mod chain;
mod last;
mod normal;

pub use chain::{FrameChain, FrameId};
pub use last::{FinalFrameNode, FinalFrameState};
pub use normal::{NormalFrameNode, NormalFrameState, SealedFrame};

use crate::{BowlingError, PinCount, Round, Score};
use tracing::instrument;

/// Result of recording a roll on a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RollOutcome {
    /// The frame that took the roll is still the one to bowl at.
    Current,
    /// The frame sealed; bowl at this newly created frame next.
    Next(FrameNode),
}

/// A frame of either kind.
///
/// Frames are only created and bowled at through a [`FrameChain`], which
/// keeps the forward links bonus scoring depends on.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum FrameNode {
    /// Rounds one through nine.
    Normal(NormalFrameNode),
    /// Round ten.
    Final(FinalFrameNode),
}

impl FrameNode {
    /// Records a roll on the underlying frame.
    ///
    /// # Errors
    ///
    /// Propagates the variant's roll errors.
    #[instrument(skip(self))]
    pub(crate) fn roll(&mut self, pins: PinCount) -> Result<RollOutcome, BowlingError> {
        match self {
            FrameNode::Normal(frame) => frame.roll(pins),
            FrameNode::Final(frame) => frame.roll(pins),
        }
    }

    /// Score of this frame; `chain` supplies bonus rolls for normal frames.
    pub(crate) fn calculate_score(&self, chain: &FrameChain) -> Score {
        match self {
            FrameNode::Normal(frame) => frame.calculate_score(chain),
            FrameNode::Final(frame) => frame.calculate_score(),
        }
    }

    /// Round of the frame.
    pub fn round(&self) -> Round {
        match self {
            FrameNode::Normal(frame) => frame.round(),
            FrameNode::Final(frame) => frame.round(),
        }
    }

    /// Rolls recorded so far, in order.
    pub fn rolls(&self) -> Vec<PinCount> {
        match self {
            FrameNode::Normal(frame) => frame.rolls(),
            FrameNode::Final(frame) => frame.rolls().to_vec(),
        }
    }

    /// Forward link; the final frame has none.
    pub fn next(&self) -> Option<FrameId> {
        match self {
            FrameNode::Normal(frame) => frame.next(),
            FrameNode::Final(_) => None,
        }
    }

    /// True once no further rolls are accepted.
    pub fn is_sealed(&self) -> bool {
        match self {
            FrameNode::Normal(frame) => frame.is_sealed(),
            FrameNode::Final(frame) => frame.is_sealed(),
        }
    }

    /// Score-sheet marks: `X` strike, `/` spare, `-` gutter.
    pub fn marks(&self) -> String {
        let rolls = self.rolls();
        let mut marks = Vec::with_capacity(rolls.len());
        // First roll at a rack that still has pins standing.
        let mut rack_start: Option<PinCount> = None;

        for pins in rolls {
            let mark = match rack_start {
                Some(first) if PinCount::frame_total(first, pins).is_ok_and(PinCount::is_strike) => {
                    rack_start = None;
                    "/".to_string()
                }
                Some(_) => {
                    rack_start = None;
                    Self::pin_mark(pins)
                }
                None if pins.is_strike() => "X".to_string(),
                None => {
                    rack_start = Some(pins);
                    Self::pin_mark(pins)
                }
            };
            marks.push(mark);
        }
        marks.join(" ")
    }

    fn pin_mark(pins: PinCount) -> String {
        if pins == PinCount::GUTTER {
            "-".to_string()
        } else {
            pins.to_string()
        }
    }

    pub(crate) fn link(&mut self, next: FrameId) {
        if let FrameNode::Normal(frame) = self {
            frame.link(next);
        }
    }
}

impl From<NormalFrameNode> for FrameNode {
    fn from(frame: NormalFrameNode) -> Self {
        FrameNode::Normal(frame)
    }
}

impl From<FinalFrameNode> for FrameNode {
    fn from(frame: FinalFrameNode) -> Self {
        FrameNode::Final(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(rolls: &[i32]) -> FrameNode {
        let mut frame = FrameNode::from(FinalFrameNode::new());
        for &value in rolls {
            frame.roll(PinCount::of(value).unwrap()).unwrap();
        }
        frame
    }

    #[test]
    fn test_marks() {
        assert_eq!(frame_with(&[10, 10, 10]).marks(), "X X X");
        assert_eq!(frame_with(&[0, 10, 5]).marks(), "- / 5");
        assert_eq!(frame_with(&[10, 3, 7]).marks(), "X 3 /");
        assert_eq!(frame_with(&[4, 5]).marks(), "4 5");
        assert_eq!(frame_with(&[]).marks(), "");
    }

    #[test]
    fn test_normal_strike_marks() {
        let mut frame = FrameNode::from(NormalFrameNode::initialize());
        frame.roll(PinCount::STRIKE).unwrap();
        assert_eq!(frame.marks(), "X");
        assert!(frame.is_sealed());
        assert!(frame.is_normal());
    }
}
