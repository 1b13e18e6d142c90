//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;
pub mod today;

pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationStatistics, run_simulation};
pub use today::{PuzzleInfo, puzzle_for};
