//! Ten-pin bowling scoring engine.
//!
//! Bowls are fed to a [`game::Game`] one at a time. The game routes each bowl
//! to the first incomplete frame and credits strike and spare bonuses the
//! instant the bonus bowl lands, so every frame total is always consistent
//! with the bowls recorded so far.
//!
//! - **[`core`]**: Pure frame and value types. No I/O, fully testable in isolation.
//! - **[`game`]**: Frame sequencing, bonus propagation, score aggregation.
//!
//! [`scorecard`] and [`replay`] build on the game for display and for playing
//! back a recorded sequence of bowls.

pub mod core;
pub mod error;
pub mod game;
pub mod logging;
pub mod replay;
pub mod scorecard;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::frame::Frame;
pub use crate::core::types::{FrameNumber, Pins};
pub use crate::error::ScoringError;
pub use crate::game::{FrameView, Game};
pub use crate::scorecard::Scorecard;
