//! Ten linked frames and the single entry point for recording bowls.
//!
//! The game routes each bowl to the first incomplete frame, then pushes the
//! same pins backward along the predecessor chain so that earlier strikes and
//! spares collect their bonus the moment it is bowled.

use std::ops::Deref;

use tracing::{debug, trace};

use crate::core::frame::Frame;
use crate::core::types::{FRAME_COUNT, FrameNumber, MAX_BOWLS, Pins};
use crate::error::ScoringError;
use crate::scorecard::Scorecard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: Vec<Frame>,
    history: Vec<Pins>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Build a fresh game with all ten frames linked and empty.
    pub fn new() -> Self {
        let frames: Vec<Frame> = FrameNumber::all().map(Frame::new).collect();
        debug_assert_eq!(frames.len(), FRAME_COUNT);
        Self {
            frames,
            history: Vec::with_capacity(MAX_BOWLS),
        }
    }

    /// Record a bowl knocking down `pins`.
    ///
    /// The game is left unchanged when the bowl is rejected.
    pub fn bowl(&mut self, pins: i32) -> Result<(), ScoringError> {
        let pins = Pins::new(pins).inspect_err(|err| debug!(%err, "bowl rejected"))?;
        let Some(number) = self.current_frame() else {
            debug!(%pins, "bowl rejected: game already complete");
            return Err(ScoringError::GameAlreadyComplete);
        };

        self.frames[number.index()]
            .bowl(pins)
            .inspect_err(|err| debug!(%err, "bowl rejected"))?;
        self.history.push(pins);
        debug!(frame = %number, %pins, "bowl recorded");

        self.credit_predecessors(number, pins);

        if self.is_finished() {
            debug!(score = self.score(), bowls = self.history.len(), "game finished");
        }
        Ok(())
    }

    /// Push `pins` to every earlier frame still owed bonus bowls.
    ///
    /// Only a run of unsettled frames directly behind `number` can be owed, so
    /// the walk stops at the first frame that takes no credit.
    fn credit_predecessors(&mut self, number: FrameNumber, pins: Pins) {
        let mut cursor = self.frames[number.index()].predecessor();
        while let Some(previous) = cursor {
            let frame = &mut self.frames[previous.index()];
            if !frame.credit_bonus(pins) {
                break;
            }
            trace!(
                frame = %previous,
                %pins,
                total = frame.frame_total(),
                "bonus credited"
            );
            cursor = frame.predecessor();
        }
    }

    /// The first frame still accepting bowls, or `None` once the game is over.
    pub fn current_frame(&self) -> Option<FrameNumber> {
        self.frames
            .iter()
            .find(|frame| !frame.is_complete())
            .map(Frame::number)
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame().is_none()
    }

    /// Total score so far: the sum of every frame's credited total.
    pub fn score(&self) -> u16 {
        self.frames.iter().map(Frame::frame_total).sum()
    }

    /// Read-only view of frame `n` (1-based).
    pub fn frame(&self, n: usize) -> Result<FrameView<'_>, ScoringError> {
        let number = FrameNumber::new(n)?;
        Ok(self.view(number))
    }

    /// Cumulative score through frame `n` (1-based).
    pub fn running_total(&self, n: usize) -> Result<u16, ScoringError> {
        Ok(self.frame(n)?.running_total())
    }

    /// Views of all ten frames in order.
    pub fn frames(&self) -> impl Iterator<Item = FrameView<'_>> {
        FrameNumber::all().map(|number| self.view(number))
    }

    /// Every bowl recorded so far, in the order it was bowled.
    pub fn bowls(&self) -> &[Pins] {
        &self.history
    }

    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_game(self)
    }

    fn view(&self, number: FrameNumber) -> FrameView<'_> {
        FrameView {
            frame: &self.frames[number.index()],
            frames: &self.frames,
        }
    }
}

/// A frame borrowed from its game, able to follow the predecessor chain.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    frame: &'a Frame,
    frames: &'a [Frame],
}

impl FrameView<'_> {
    /// This frame's total plus the totals of every frame before it.
    pub fn running_total(&self) -> u16 {
        let mut total = self.frame.frame_total();
        let mut cursor = self.frame.predecessor();
        while let Some(previous) = cursor {
            let frame = &self.frames[previous.index()];
            total += frame.frame_total();
            cursor = frame.predecessor();
        }
        total
    }

    /// Running total once this frame and all before it are settled.
    pub fn settled_running_total(&self) -> Option<u16> {
        let settled = self.frames[..=self.frame.number().index()]
            .iter()
            .all(Frame::is_settled);
        settled.then(|| self.running_total())
    }
}

impl Deref for FrameView<'_> {
    type Target = Frame;

    fn deref(&self) -> &Self::Target {
        self.frame
    }
}
