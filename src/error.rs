//! Error types shared by the engine and the console boundary.

use thiserror::Error;

/// Text that does not name one of the five moves.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid move: {value:?}")]
pub struct InvalidMoveError {
    /// The rejected input, as received.
    pub value: String,
}

impl InvalidMoveError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    /// The input stream closed while a prompt was still waiting for an answer.
    #[error("input closed while waiting for: {prompt}")]
    InputExhausted { prompt: String },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A round was requested after the session already produced a winner.
    #[error("session is over; reset before playing another round")]
    SessionFinished,
}

impl GameError {
    /// Whether the game can keep going after this error.
    ///
    /// Only bad move text is recoverable, and the console loop handles
    /// that by prompting again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
