//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::players::{ComputerPlayer, DEFAULT_ROSTER};

/// Settings for a game. The win threshold is fixed and not part of this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the computer's RNG. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Names the computer opponent is drawn from.
    pub computer_roster: Vec<String>,

    /// Keep earlier sessions' rounds in the history after a replay.
    pub keep_history_across_replays: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            computer_roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            keep_history_across_replays: true,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the roster. An empty roster keeps the default.
    pub fn with_computer_roster<S: Into<String>>(mut self, roster: impl IntoIterator<Item = S>) -> Self {
        let roster: Vec<String> = roster.into_iter().map(Into::into).collect();
        if !roster.is_empty() {
            self.computer_roster = roster;
        }
        self
    }

    pub fn with_history_across_replays(mut self, keep: bool) -> Self {
        self.keep_history_across_replays = keep;
        self
    }

    /// Build the computer opponent this config describes.
    pub fn computer(&self) -> ComputerPlayer {
        let rng = GameRng::from_seed_or_entropy(self.seed);
        ComputerPlayer::from_roster(self.computer_roster.as_slice(), rng)
    }
}
