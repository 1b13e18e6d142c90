//! Terminal output formatting
//!
//! Board renderers and pretty-printing for command results.

pub mod display;
pub mod formatters;
mod render;

pub use display::{print_puzzle_info, print_score_result, print_simulation_statistics};
pub use render::{AnsiRenderer, BoardRenderer, EmojiRenderer};
