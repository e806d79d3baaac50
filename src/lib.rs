//! # rpsls
//!
//! Rock, Paper, Scissors, Lizard, Spock between a human on the console and
//! a scripted computer opponent. Sessions run until one side has won
//! `WIN_THRESHOLD` rounds; the player may then start another session.
//!
//! ## Design Principles
//!
//! 1. **Closed types**: Moves are an enum. Text is validated once, at the
//!    console, and never again downstream.
//!
//! 2. **Injected randomness**: The computer owns a seedable `GameRng`, so a
//!    seed reproduces a whole game.
//!
//! 3. **I/O at the edge**: The engine talks to a `Console` trait. The
//!    terminal and scripted tests go through the same code.
//!
//! ## Modules
//!
//! - `core`: Moves, player names, seats, RNG
//! - `rules`: Round judging and scoring
//! - `players`: `Player` trait, human and computer players
//! - `session`: Round loop, history, replay, display text
//! - `io`: Console boundary
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use rpsls::{ComputerPlayer, GameRng, GameSession, HumanPlayer, LineConsole, PlayerName};
//!
//! let human = HumanPlayer::new(PlayerName::new("Ada").unwrap());
//! let computer = ComputerPlayer::with_default_roster(GameRng::new(42));
//! let mut session = GameSession::new(human, computer);
//!
//! let mut io = LineConsole::scripted("rock\n");
//! let report = session.play_round(&mut io).unwrap();
//! assert_eq!(report.round, 1);
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod core;
pub mod error;
pub mod io;
pub mod players;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, Move, PlayerName, Seat};

pub use crate::error::{GameError, InvalidMoveError, Result};

pub use crate::io::{Console, LineConsole};

pub use crate::players::{ComputerPlayer, HumanPlayer, Personality, Player};

pub use crate::rules::{RoundOutcome, Score, WIN_THRESHOLD};

pub use crate::session::{
    GameSession, History, HistoryEntry, PromptReplay, ReplayPolicy, RoundReport, RoundWinner,
    SessionConfig, SessionPhase, SingleSession, TIE_MARKER,
};
