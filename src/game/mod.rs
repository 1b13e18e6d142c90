//! Game sessions and the store that owns them

mod board;
mod session;
mod store;

pub use board::{Board, BoardLayout, MAX_ATTEMPTS, Tile, empty_board, scored_row};
pub use session::{GameSession, GameState, GuessOutcome, SessionConfig};
pub use store::{PlayerId, SessionStore, StartedSession};
