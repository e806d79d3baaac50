//! Scripted computer opponent.
//!
//! The computer's name decides its personality. The default roster has a
//! single member, R2D2, who throws Rock half the time:
//!
//! | Roll (1-100) | Move                                      |
//! |--------------|-------------------------------------------|
//! | 1-50         | Rock                                      |
//! | 51-100       | uniform over Paper, Scissors, Lizard, Spock |
//!
//! Any other name plays uniformly over all five moves.

use tracing::{debug, info};

use crate::core::{GameRng, Move, PlayerName};
use crate::error::Result;
use crate::io::Console;

use super::Player;

/// Computer names used when none are configured.
pub const DEFAULT_ROSTER: &[&str] = &["R2D2"];

/// Moves R2D2 picks from when the roll misses Rock.
const NON_ROCK: [Move; 4] = [Move::Paper, Move::Scissors, Move::Lizard, Move::Spock];

/// How a computer player picks its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Personality {
    /// Rock on a roll of 1-50, otherwise any other move.
    RockHeavy,
    /// Every move equally likely.
    Uniform,
}

impl Personality {
    /// Personality that goes with a roster name.
    #[must_use]
    pub fn for_name(name: &PlayerName) -> Self {
        match name.as_str() {
            "R2D2" => Personality::RockHeavy,
            _ => Personality::Uniform,
        }
    }

    /// Draw one move.
    pub fn pick(self, rng: &mut GameRng) -> Move {
        match self {
            Personality::RockHeavy => {
                let roll = rng.roll(1..=100);
                let choice = match roll {
                    1..=50 => Move::Rock,
                    _ => NON_ROCK[rng.roll(0..=3) as usize],
                };
                debug!(roll, choice = %choice, "rock-heavy roll");
                choice
            }
            Personality::Uniform => Move::ALL[rng.roll(0..=4) as usize],
        }
    }
}

#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    name: PlayerName,
    personality: Personality,
    rng: GameRng,
    current: Option<Move>,
}

impl ComputerPlayer {
    /// Computer with a fixed name; personality follows from the name.
    pub fn new(name: PlayerName, rng: GameRng) -> Self {
        let personality = Personality::for_name(&name);
        Self {
            name,
            personality,
            rng,
            current: None,
        }
    }

    /// Draw a name from `roster` and build the matching computer.
    ///
    /// Blank roster entries are skipped; an empty roster falls back to
    /// `DEFAULT_ROSTER`. The move stream is split from the naming stream so
    /// the roster size does not shift later rolls.
    pub fn from_roster<S: AsRef<str>>(roster: &[S], mut rng: GameRng) -> Self {
        let names: Vec<PlayerName> = roster
            .iter()
            .filter_map(|n| PlayerName::new(n.as_ref()))
            .collect();

        let name = match rng.choose(&names) {
            Some(name) => name.clone(),
            None => return Self::with_default_roster(rng),
        };
        let move_rng = rng.for_context(name.as_str());
        let player = Self::new(name, move_rng);
        info!(name = %player.name, personality = ?player.personality, "computer player joined");
        player
    }

    /// Computer drawn from `DEFAULT_ROSTER`.
    pub fn with_default_roster(rng: GameRng) -> Self {
        Self::from_roster(DEFAULT_ROSTER, rng)
    }

    #[must_use]
    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Pick a move without going through the `Player` trait.
    pub fn pick(&mut self) -> Move {
        let choice = self.personality.pick(&mut self.rng);
        self.current = Some(choice);
        choice
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &PlayerName {
        &self.name
    }

    fn current_move(&self) -> Option<Move> {
        self.current
    }

    fn choose_move(&mut self, _io: &mut dyn Console) -> Result<Move> {
        Ok(self.pick())
    }
}
