//! Test-only helpers for building frames and games from raw pin counts.

use crate::core::frame::Frame;
use crate::core::types::{FrameNumber, Pins};
use crate::game::Game;

/// Validated pins; panics on out-of-range input.
pub fn pins(value: i32) -> Pins {
    Pins::new(value).expect("pins in range")
}

/// Create a frame at `number` with `bowls` already recorded.
pub fn frame_with(number: usize, bowls: &[i32]) -> Frame {
    let number = FrameNumber::new(number).expect("frame number in range");
    let mut frame = Frame::new(number);
    for &value in bowls {
        frame.bowl(pins(value)).expect("bowl accepted");
    }
    frame
}

/// Create a game with `bowls` already recorded in order.
pub fn game_with(bowls: &[i32]) -> Game {
    let mut game = Game::new();
    for &value in bowls {
        game.bowl(value).expect("bowl accepted");
    }
    game
}

/// The twelve strikes of a perfect game.
pub fn perfect_game() -> Vec<i32> {
    vec![10; 12]
}

/// A full game mixing open frames, spares, strikes and a spare in the tenth.
///
/// Running totals by frame: 5, 14, 29, 49, 60, 61, 77, 97, 117, 133.
pub fn sample_game() -> Vec<i32> {
    vec![1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]
}
