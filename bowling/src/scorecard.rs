//! Printable, serializable snapshot of a game.
//!
//! Totals only appear once they can no longer change, the way a paper
//! scorecard leaves an open strike or spare blank until its bonus is bowled.

use std::fmt;

use serde::Serialize;

use crate::core::frame::Frame;
use crate::core::types::{FrameNumber, PIN_COUNT, Pins};
use crate::game::Game;

const CELL_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub frames: Vec<FrameRow>,
    pub score: u16,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameRow {
    pub frame: FrameNumber,
    pub bowls: Vec<Pins>,
    /// Conventional marks: `X` strike, `/` spare, `-` gutter.
    pub marks: String,
    pub total: Option<u16>,
    pub running_total: Option<u16>,
}

impl Scorecard {
    pub fn from_game(game: &Game) -> Self {
        let frames = game
            .frames()
            .map(|view| FrameRow {
                frame: view.number(),
                bowls: view.bowls().collect(),
                marks: marks(&view),
                total: view.settled_total(),
                running_total: view.settled_running_total(),
            })
            .collect();

        Self {
            frames,
            score: game.score(),
            finished: game.is_finished(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Render a frame's bowls as scorecard marks.
///
/// A strike or spare clears the rack, so the final frame can show `X` or `/`
/// more than once.
fn marks(frame: &Frame) -> String {
    let mut out = String::new();
    let mut rack_first: Option<Pins> = None;
    for pins in frame.bowls() {
        match rack_first {
            None if pins.is_all() => out.push('X'),
            None => {
                out.push(digit(pins));
                rack_first = Some(pins);
            }
            Some(first) => {
                if first.get() + pins.get() == PIN_COUNT {
                    out.push('/');
                } else {
                    out.push(digit(pins));
                }
                rack_first = None;
            }
        }
    }
    out
}

fn digit(pins: Pins) -> char {
    match pins.get() {
        0 => '-',
        n => char::from_digit(u32::from(n), 10).unwrap_or('?'),
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.frames.iter().map(|row| row.frame.to_string()).collect();
        let marks: Vec<String> = self.frames.iter().map(|row| row.marks.clone()).collect();
        let running: Vec<String> = self
            .frames
            .iter()
            .map(|row| row.running_total.map(|total| total.to_string()).unwrap_or_default())
            .collect();

        write_row(f, &header)?;
        write_row(f, &marks)?;
        write_row(f, &running)?;
        write!(f, "score: {}", self.score)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
    write!(f, "|")?;
    for cell in cells {
        write!(f, "{:^width$}|", cell, width = CELL_WIDTH)?;
    }
    writeln!(f)
}
