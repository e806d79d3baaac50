//! Result of a single round.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Seat};

/// Result of one exchange of moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One seat won the round.
    Winner(Seat),
    /// Both players picked the same move.
    Tie,
}

impl RoundOutcome {
    /// Judge the human's move against the computer's.
    #[must_use]
    pub fn judge(human: Move, computer: Move) -> Self {
        if human.beats(computer) {
            RoundOutcome::Winner(Seat::Human)
        } else if computer.beats(human) {
            RoundOutcome::Winner(Seat::Computer)
        } else {
            RoundOutcome::Tie
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, RoundOutcome::Winner(s) if *s == seat)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Winner(seat) => Some(*seat),
            RoundOutcome::Tie => None,
        }
    }
}
