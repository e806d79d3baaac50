//! Players and their move-selection strategies.
//!
//! Both variants implement `Player`; they differ only in how they pick:
//! - `HumanPlayer` asks on the console
//! - `ComputerPlayer` rolls a scripted personality

pub mod computer;
pub mod human;

pub use computer::{ComputerPlayer, Personality, DEFAULT_ROSTER};
pub use human::HumanPlayer;

use crate::core::{Move, PlayerName};
use crate::error::Result;
use crate::io::Console;

/// Anything that can sit at the table.
pub trait Player {
    /// Name fixed at creation.
    fn name(&self) -> &PlayerName;

    /// Move chosen in the current round, if one has been chosen yet.
    fn current_move(&self) -> Option<Move>;

    /// Pick a move for this round, replacing the previous one.
    ///
    /// Players that never prompt may ignore `io`.
    fn choose_move(&mut self, io: &mut dyn Console) -> Result<Move>;
}
