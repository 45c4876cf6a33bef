//! Build a game from a recorded sequence of bowls.

use anyhow::{Context, Result};

use crate::game::Game;

/// Play `bowls` into a fresh game in order.
///
/// Stops at the first rejected bowl, naming its 1-based position.
pub fn replay<I>(bowls: I) -> Result<Game>
where
    I: IntoIterator<Item = i32>,
{
    let mut game = Game::new();
    for (position, pins) in bowls.into_iter().enumerate() {
        game.bowl(pins)
            .with_context(|| format!("replay bowl #{} ({} pins)", position + 1, pins))?;
    }
    Ok(game)
}
