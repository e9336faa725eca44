//! # roshambo
//!
//! This crate is a game of rock-paper-scissors played in the terminal against a computer that
//! decides on a single move at startup and sticks to it for the whole session. That one-shot
//! draw is a deliberate quirk of the game, not an oversight.
//!
//! Each round you type a move, the computer reveals its own, and the running score goes up on a
//! win and down on a loss. Anything the game does not recognize counts as a win for you, because
//! that is how the game has always behaved. Type `exit` to stop and see the final score.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use roshambo::init;

fn main() -> Result<()> {
    init()
}
