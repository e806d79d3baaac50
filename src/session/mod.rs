//! Sessions: the round loop, its history, and what gets printed.

pub mod config;
pub mod display;
pub mod game;
pub mod history;
pub mod replay;

pub use config::SessionConfig;
pub use game::{GameSession, RoundReport, SessionPhase};
pub use history::{History, HistoryEntry, RoundWinner, Throw, TIE_MARKER};
pub use replay::{PromptReplay, ReplayPolicy, SingleSession};
