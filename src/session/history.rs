//! Round-by-round record of a game.
//!
//! Entries are written once when a round ends and never changed. The log is
//! append-only from outside the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Move, PlayerName, Seat};
use crate::rules::RoundOutcome;

/// Written in place of a winner's name when a round is tied.
pub const TIE_MARKER: &str = "---";

/// One player's move in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw {
    pub name: PlayerName,
    pub choice: Move,
}

/// Who took a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundWinner {
    Player(PlayerName),
    Tie,
}

impl fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundWinner::Player(name) => write!(f, "{}", name),
            RoundWinner::Tie => f.write_str(TIE_MARKER),
        }
    }
}

/// Snapshot of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    human: Throw,
    computer: Throw,
    winner: RoundWinner,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(human: Throw, computer: Throw, outcome: RoundOutcome) -> Self {
        let winner = match outcome {
            RoundOutcome::Winner(Seat::Human) => RoundWinner::Player(human.name.clone()),
            RoundOutcome::Winner(Seat::Computer) => RoundWinner::Player(computer.name.clone()),
            RoundOutcome::Tie => RoundWinner::Tie,
        };
        Self {
            human,
            computer,
            winner,
        }
    }

    #[must_use]
    pub fn throw(&self, seat: Seat) -> &Throw {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    #[must_use]
    pub fn winner(&self) -> &RoundWinner {
        &self.winner
    }
}

/// Ordered log of every round played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
