//! Validated value types shared by the scoring core.
//!
//! These types define stable contracts between core components. Construction
//! is the only place range checks happen; once a `Pins` or `FrameNumber`
//! exists it is known to be in range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Pins standing in a fresh rack.
pub const PIN_COUNT: u8 = 10;

/// Most bowls a single game can take (nine open frames plus three in the tenth).
pub const MAX_BOWLS: usize = 21;

/// Pins knocked down by a single bowl, always in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Pins(u8);

impl Pins {
    pub const GUTTER: Pins = Pins(0);
    pub const ALL: Pins = Pins(PIN_COUNT);

    pub fn new(pins: i32) -> Result<Self, ScoringError> {
        match u8::try_from(pins) {
            Ok(value) if value <= PIN_COUNT => Ok(Pins(value)),
            _ => Err(ScoringError::InvalidBowl { pins }),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == PIN_COUNT
    }
}

impl TryFrom<i32> for Pins {
    type Error = ScoringError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Pins::new(pins)
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        pins.0
    }
}

impl From<Pins> for u16 {
    fn from(pins: Pins) -> Self {
        u16::from(pins.0)
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based position of a frame within the game, always in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "u8")]
pub struct FrameNumber(u8);

impl FrameNumber {
    pub const FIRST: FrameNumber = FrameNumber(1);
    pub const LAST: FrameNumber = FrameNumber(FRAME_COUNT as u8);

    pub fn new(number: usize) -> Result<Self, ScoringError> {
        if (1..=FRAME_COUNT).contains(&number) {
            Ok(FrameNumber(number as u8))
        } else {
            Err(ScoringError::InvalidFrameIndex { index: number })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the game's frame sequence.
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// The frame bowled immediately before this one, if any.
    pub fn previous(self) -> Option<FrameNumber> {
        (self.0 > 1).then(|| FrameNumber(self.0 - 1))
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// All frame numbers in bowling order.
    pub fn all() -> impl Iterator<Item = FrameNumber> {
        (1..=FRAME_COUNT as u8).map(FrameNumber)
    }
}

impl TryFrom<usize> for FrameNumber {
    type Error = ScoringError;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        FrameNumber::new(number)
    }
}

impl From<FrameNumber> for u8 {
    fn from(number: FrameNumber) -> Self {
        number.0
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
