//! Player identity and table seats.
//!
//! ## PlayerName
//!
//! Non-empty display name, fixed once a player is created.
//!
//! ## Seat
//!
//! Which side of the table a player sits on. The human is always player A
//! and moves first; the computer is player B.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's name. Always non-empty and trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Build a name from raw input. Returns `None` when nothing but
    /// whitespace was given.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerName::new(&value).ok_or("player name must not be empty")
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// Side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player A, the human.
    Human,
    /// Player B, the computer.
    Computer,
}

impl Seat {
    /// Both seats in move order.
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// 0-based index, used to address per-seat storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}
