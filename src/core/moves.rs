//! The five moves and the relation between them.
//!
//! Each move beats exactly two others and loses to exactly two:
//!
//! | Move     | Beats              | Loses to           |
//! |----------|--------------------|--------------------|
//! | Rock     | Scissors, Lizard   | Paper, Spock       |
//! | Paper    | Rock, Spock        | Scissors, Lizard   |
//! | Scissors | Paper, Lizard      | Rock, Spock        |
//! | Lizard   | Paper, Spock       | Rock, Scissors     |
//! | Spock    | Rock, Scissors     | Paper, Lizard      |
//!
//! Moves are parsed from their lowercase names, case-sensitively:
//!
//! ```
//! use rpsls::core::Move;
//!
//! let rock: Move = "rock".parse().unwrap();
//! assert!(rock.beats(Move::Lizard));
//! assert!("Rock".parse::<Move>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidMoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// All moves in canonical order. Rock comes first.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// The lowercase name players type to pick this move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Whether this move defeats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors | Move::Lizard)
                | (Move::Paper, Move::Rock | Move::Spock)
                | (Move::Scissors, Move::Paper | Move::Lizard)
                | (Move::Lizard, Move::Paper | Move::Spock)
                | (Move::Spock, Move::Rock | Move::Scissors)
        )
    }

    /// Whether `other` defeats this move.
    ///
    /// Kept as its own table; always agrees with `other.beats(self)`.
    #[must_use]
    pub fn loses_to(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Paper | Move::Spock)
                | (Move::Paper, Move::Scissors | Move::Lizard)
                | (Move::Scissors, Move::Rock | Move::Spock)
                | (Move::Lizard, Move::Rock | Move::Scissors)
                | (Move::Spock, Move::Paper | Move::Lizard)
        )
    }

    /// The two moves this move defeats.
    pub fn victims(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |&other| self.beats(other))
    }

    /// The two moves that defeat this one.
    pub fn predators(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |&other| self.loses_to(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| InvalidMoveError::new(s))
    }
}

impl TryFrom<&str> for Move {
    type Error = InvalidMoveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
