//! Round judging and session scoring.
//!
//! - `RoundOutcome` turns a pair of moves into a winner or a tie
//! - `Score` counts round wins and decides when a session is over

pub mod outcome;
pub mod score;

pub use outcome::RoundOutcome;
pub use score::{Score, WIN_THRESHOLD};
