//! Arena of frames linked forward by id.

use super::{FinalFrameNode, FrameNode, NormalFrameNode, RollOutcome};
use crate::{BowlingError, BowlingErrorKind, PinCount, Round, Score};
use id_arena::{Arena, Id};
use tracing::{debug, instrument};

/// Id of a frame within its [`FrameChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(Id<FrameNode>);

impl FrameId {
    /// Position of the frame in creation order.
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index())
    }
}

/// Every frame of one game, in the order they were created.
///
/// Frames are allocated when the previous frame seals and are never removed,
/// so a sealed frame's forward link always points at a later frame.
pub struct FrameChain {
    frames: Arena<FrameNode>,
    head: FrameId,
    tail: FrameId,
}

impl FrameChain {
    /// Chain starting at an empty first-round frame.
    #[instrument]
    pub fn initialize() -> Self {
        Self::starting_with(FrameNode::Normal(NormalFrameNode::initialize()))
    }

    /// Chain starting at an empty frame for `round`.
    ///
    /// # Errors
    ///
    /// Never fails for a validated [`Round`]; the result type mirrors
    /// [`NormalFrameNode::of`].
    #[track_caller]
    #[instrument]
    pub fn of(round: Round) -> Result<Self, BowlingError> {
        let head = if round.is_final() {
            FrameNode::Final(FinalFrameNode::new())
        } else {
            FrameNode::Normal(NormalFrameNode::of(round)?)
        };
        Ok(Self::starting_with(head))
    }

    fn starting_with(head: FrameNode) -> Self {
        let mut frames = Arena::with_capacity(usize::from(Round::FINAL_ROUND));
        let head = FrameId(frames.alloc(head));
        Self {
            frames,
            head,
            tail: head,
        }
    }

    /// The frame the chain was created with.
    pub fn head(&self) -> FrameId {
        self.head
    }

    /// Most recently created frame.
    pub fn tail(&self) -> FrameId {
        self.tail
    }

    /// Looks up a frame; `None` for ids from another chain.
    pub fn frame(&self, id: FrameId) -> Option<&FrameNode> {
        self.frames.get(id.0)
    }

    /// Number of frames created so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a chain holds at least its head.
    pub fn is_empty(&self) -> bool {
        self.frames.len() == 0
    }

    /// Frames with their ids, in creation order.
    pub fn frames(&self) -> impl Iterator<Item = (FrameId, &FrameNode)> {
        self.frames.iter().map(|(id, frame)| (FrameId(id), frame))
    }

    /// Records a roll on frame `id`.
    ///
    /// Returns the frame to bowl at next: `id` itself while it stays open,
    /// otherwise the frame created when it sealed.
    ///
    /// # Errors
    ///
    /// - [`BowlingErrorKind::UnknownFrame`] if `id` is not in this chain
    /// - any error from the frame's own roll
    #[instrument(skip(self), fields(frames = self.frames.len()))]
    pub fn roll(&mut self, id: FrameId, pins: PinCount) -> Result<FrameId, BowlingError> {
        let next_id = FrameId(self.frames.next_id());
        let frame = self
            .frames
            .get_mut(id.0)
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnknownFrame(id.index())))?;

        match frame.roll(pins)? {
            RollOutcome::Current => Ok(id),
            RollOutcome::Next(next) => {
                frame.link(next_id);
                let allocated = FrameId(self.frames.alloc(next));
                debug_assert_eq!(allocated, next_id);
                self.tail = allocated;
                debug!(from = %id, to = %allocated, "Chain extended");
                Ok(allocated)
            }
        }
    }

    /// Score of frame `id`. Read-only; repeated calls agree.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingErrorKind::UnknownFrame`] if `id` is not in this chain.
    #[instrument(skip(self))]
    pub fn calculate_score(&self, id: FrameId) -> Result<Score, BowlingError> {
        self.frame(id)
            .map(|frame| frame.calculate_score(self))
            .ok_or_else(|| BowlingError::new(BowlingErrorKind::UnknownFrame(id.index())))
    }

    /// The first `needed` rolls bowled after a frame, starting at its
    /// forward link `start`.
    ///
    /// Walks frame to frame through forward links, so a run of strikes is
    /// followed as deep as it goes. Returns `None` while fewer than `needed`
    /// rolls exist.
    pub(crate) fn bonus_rolls(&self, start: Option<FrameId>, needed: usize) -> Option<Vec<PinCount>> {
        let mut bonus = Vec::with_capacity(needed);
        let mut cursor = start;

        while bonus.len() < needed {
            let frame = self.frame(cursor?)?;
            let missing = needed - bonus.len();
            bonus.extend(frame.rolls().into_iter().take(missing));
            cursor = frame.next();
        }

        Some(bonus)
    }
}

impl std::fmt::Debug for FrameChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.frames()).finish()
    }
}

impl Default for FrameChain {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(value: i32) -> PinCount {
        PinCount::of(value).unwrap()
    }

    #[test]
    fn test_open_roll_keeps_frame() {
        let mut chain = FrameChain::initialize();
        let head = chain.head();
        assert_eq!(chain.roll(head, pins(3)).unwrap(), head);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_sealing_links_forward() {
        let mut chain = FrameChain::initialize();
        let head = chain.head();
        let second = chain.roll(head, PinCount::STRIKE).unwrap();

        assert_ne!(second, head);
        assert_eq!(chain.frame(head).unwrap().next(), Some(second));
        assert_eq!(chain.frame(second).unwrap().round().number(), 2);
        assert_eq!(chain.tail(), second);
    }

    #[test]
    fn test_frame_from_other_chain_rejected() {
        let mut other = FrameChain::initialize();
        let foreign = other.roll(other.head(), PinCount::STRIKE).unwrap();

        let mut chain = FrameChain::initialize();
        let err = chain.roll(foreign, pins(1)).unwrap_err();
        assert_eq!(err.kind(), &BowlingErrorKind::UnknownFrame(1));
        assert!(chain.calculate_score(foreign).is_err());
        assert!(chain.frame(other.head()).is_none());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let mut chain = FrameChain::initialize();
        let mut current = chain.head();
        for _ in 0..3 {
            current = chain.roll(current, PinCount::STRIKE).unwrap();
        }

        let indices: Vec<usize> = chain.frames().map(|(id, _)| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(chain.tail(), current);
        assert_eq!(chain.tail().to_string(), "#3");
    }

    #[test]
    fn test_bonus_walk_crosses_strikes() {
        let mut chain = FrameChain::initialize();
        let mut current = chain.head();
        for _ in 0..3 {
            current = chain.roll(current, PinCount::STRIKE).unwrap();
        }
        chain.roll(current, pins(4)).unwrap();

        let start = chain.frame(chain.head()).unwrap().next();
        let bonus = chain.bonus_rolls(start, 3).unwrap();
        assert_eq!(bonus, vec![PinCount::STRIKE, PinCount::STRIKE, pins(4)]);
        assert!(chain.bonus_rolls(start, 4).is_none());
    }

    #[test]
    fn test_new_chain_holds_its_head() {
        let chain = FrameChain::initialize();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.tail(), chain.head());
        assert!(chain.frame(chain.tail()).is_some());

        let chain = FrameChain::default();
        assert_eq!(chain.tail(), chain.head());
    }

    #[test]
    fn test_chain_from_final_round() {
        let chain = FrameChain::of(Round::last()).unwrap();
        assert!(chain.frame(chain.head()).unwrap().is_final());
    }
}
