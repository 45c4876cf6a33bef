//! Errors reported by the scoring engine.
//!
//! Every rejected operation leaves the game untouched, so callers can inspect
//! the error and carry on with the same `Game`.

use thiserror::Error;

use crate::core::types::FrameNumber;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid bowl: pins must be in range 0-10, received {pins}")]
    InvalidBowl { pins: i32 },

    #[error("invalid bowl: {pins} pins knocked down in frame {frame} but only {standing} standing")]
    TooManyPins {
        frame: FrameNumber,
        pins: u8,
        standing: u8,
    },

    #[error("frame {frame} is already complete")]
    FrameAlreadyComplete { frame: FrameNumber },

    #[error("game is already complete")]
    GameAlreadyComplete,

    #[error("invalid frame index: frame must be in range 1-10, received {index}")]
    InvalidFrameIndex { index: usize },
}
