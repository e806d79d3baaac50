//! Console-driven player.

use tracing::info;

use crate::core::{Move, PlayerName};
use crate::error::Result;
use crate::io::{ask, Console};

use super::Player;

pub const NAME_PROMPT: &str = "What's your name?";
pub const NAME_REJECTED: &str = "Sorry, must enter a value.";
pub const MOVE_PROMPT: &str = "Please choose rock, paper, scissors, lizard, or spock:";
pub const MOVE_REJECTED: &str = "Invalid choice.";

#[derive(Clone, Debug)]
pub struct HumanPlayer {
    name: PlayerName,
    current: Option<Move>,
}

impl HumanPlayer {
    pub fn new(name: PlayerName) -> Self {
        Self {
            name,
            current: None,
        }
    }

    /// Prompt for a name until something non-blank is entered.
    pub fn ask_name(io: &mut dyn Console) -> Result<Self> {
        let name = ask(io, NAME_PROMPT, NAME_REJECTED, PlayerName::new)?;
        info!(name = %name, "human player joined");
        Ok(Self::new(name))
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &PlayerName {
        &self.name
    }

    fn current_move(&self) -> Option<Move> {
        self.current
    }

    /// Move names are matched exactly (`rock`, not `Rock`); surrounding
    /// whitespace is ignored.
    fn choose_move(&mut self, io: &mut dyn Console) -> Result<Move> {
        let choice = ask(io, MOVE_PROMPT, MOVE_REJECTED, |line| {
            line.trim().parse::<Move>().ok()
        })?;
        self.current = Some(choice);
        Ok(choice)
    }
}
