//! Core domain types for the daily puzzle
//!
//! Words, scoring and the grid the board is stored in. Nothing here knows about
//! dates, players or terminals.

mod error;
mod grid;
mod verdict;
mod word;

pub use error::{ConfigError, GameError, GridError, ScoreError, ValidationError};
pub use grid::Grid2D;
pub use verdict::{Feedback, Verdict, score};
pub use word::{WORD_LENGTH, Word};
