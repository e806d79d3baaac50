//! Core value types: moves, player identity, RNG.
//!
//! Nothing in here performs I/O.

pub mod moves;
pub mod player;
pub mod rng;

pub use moves::Move;
pub use player::{PlayerName, Seat};
pub use rng::GameRng;
