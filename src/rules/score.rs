//! Per-session win counters.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Seat};

use super::outcome::RoundOutcome;

/// Round wins needed to take a session.
pub const WIN_THRESHOLD: u32 = 3;

/// Win counts for both seats.
///
/// Counters only grow within a session; `reset` zeroes them for a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    wins: [u32; 2],
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the round's winner, if any. Ties change nothing.
    pub fn record_round(&mut self, human: Move, computer: Move) -> RoundOutcome {
        let outcome = RoundOutcome::judge(human, computer);
        if let RoundOutcome::Winner(seat) = outcome {
            self.wins[seat.index()] += 1;
        }
        outcome
    }

    /// Rounds won by a seat this session.
    #[must_use]
    pub fn get(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    /// True once either seat has reached `WIN_THRESHOLD`.
    #[must_use]
    pub fn is_session_over(&self) -> bool {
        self.wins.iter().any(|&w| w >= WIN_THRESHOLD)
    }

    /// The seat ahead on points, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        let (human, computer) = (self.get(Seat::Human), self.get(Seat::Computer));
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Some(Seat::Human),
            std::cmp::Ordering::Less => Some(Seat::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reset(&mut self) {
        self.wins = [0; 2];
    }
}
