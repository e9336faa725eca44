//! This module contains the function that takes input from the user. It uses the `dialoguer`
//! crate to process the input, but unlike most prompts it barely validates anything.
//!
//! The game compares tokens case-sensitively against the move names and never rejects a token it
//! does not recognize, so the only requirement enforced here is that the line holds a token at
//! all. Reading a whole line into an owned string also replaces the fixed-size buffer the game
//! historically read into, so arbitrarily long input is safe.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// This function is in charge of taking the user's move for one round. It re-prompts until the
/// line contains at least one non-whitespace character and then hands back the first
/// whitespace-delimited token, untouched; deciding what the token means is the game loop's job.
pub(crate) fn take_input(term: &Term) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Your move").bold()))
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.split_whitespace().next().is_some() {
                Ok(())
            } else {
                Err("Type a move, or exit to stop playing")
            }
        })
        .interact_text_on(term)?;

    Ok(input
        .split_whitespace()
        .next()
        // the validator guarantees the line holds a token
        .unwrap_or_default()
        .to_string())
}
