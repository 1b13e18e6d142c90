//! Error types for the puzzle engine
//!
//! Errors are grouped by who is expected to handle them:
//! - [`ConfigError`]: broken word lists, fatal at startup
//! - [`ValidationError`]: a bad guess, reported back to the player
//! - [`GameError`]: a guess that cannot be applied to the current session
//! - [`GridError`]: misuse of [`Grid2D`](super::Grid2D) by the caller
//! - [`ScoreError`]: scorer called with malformed words

use std::path::PathBuf;

use thiserror::Error;

use super::word::WORD_LENGTH;
use crate::game::{GameState, PlayerId};

/// A word list could not be turned into a usable bank
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid word list entry {entry:?} on line {line}: {reason}")]
    InvalidWordBank {
        line: usize,
        entry: String,
        reason: String,
    },

    #[error("word list is empty")]
    EmptyWordBank,

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A guess was rejected before it reached the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("guess must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidGuessLength(usize),

    #[error("guess {0:?} must contain only the letters A-Z")]
    InvalidGuessFormat(String),

    #[error("{0} is not in the word list")]
    NotInWordBank(String),
}

/// A guess could not be applied to a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("this game is over ({0}); start a new session to keep playing")]
    SessionTerminated(GameState),

    #[error("no active session for player {0}")]
    NoActiveSession(PlayerId),
}

/// Grid accessor called outside the grid's shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("range {start}..{end} is outside 0..{len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("row has {actual} cells, grid has {expected} columns")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Scorer preconditions were not met
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid scorer input: {0}")]
    InvalidInput(#[from] ValidationError),
}
