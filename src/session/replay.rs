//! Whether to start another session once one is decided.

use crate::error::Result;
use crate::io::{ask, Console};

pub const REPLAY_PROMPT: &str = "Would you like to play again? (y/n)";
pub const REPLAY_REJECTED: &str = "Sorry, must be y or n.";

/// Asked only after a session has a winner, never between rounds.
pub trait ReplayPolicy {
    fn play_again(&mut self, io: &mut dyn Console) -> Result<bool>;
}

/// Ask the player on the console. `y` or `n`, either case.
#[derive(Clone, Copy, Debug, Default)]
pub struct PromptReplay;

impl ReplayPolicy for PromptReplay {
    fn play_again(&mut self, io: &mut dyn Console) -> Result<bool> {
        ask(io, REPLAY_PROMPT, REPLAY_REJECTED, parse_answer)
    }
}

/// Play a single session and stop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleSession;

impl ReplayPolicy for SingleSession {
    fn play_again(&mut self, _io: &mut dyn Console) -> Result<bool> {
        Ok(false)
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim() {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}
