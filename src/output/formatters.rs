//! Formatting utilities for terminal output

use colored::Colorize;
use rustc_hash::FxHashMap;

use crate::core::Verdict;

/// QWERTY rows for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One keyboard row with each letter colored by its best verdict so far
#[must_use]
pub fn keyboard_row(row: &str, states: &FxHashMap<char, Verdict>) -> String {
    row.chars()
        .map(|letter| {
            let key = letter.to_string();
            match states.get(&letter) {
                Some(Verdict::Correct) => key.green().bold().to_string(),
                Some(Verdict::Present) => key.yellow().bold().to_string(),
                Some(Verdict::Absent) => key.bright_black().to_string(),
                None => key.white().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1 guess" / "3 guesses"
#[must_use]
pub fn plural_guesses(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn keyboard_row_keeps_every_letter() {
        colored::control::set_override(false);
        let mut states = FxHashMap::default();
        states.insert('Q', Verdict::Correct);
        assert_eq!(keyboard_row("QWE", &states), "Q W E");
    }

    #[test]
    fn guess_counts_read_naturally() {
        assert_eq!(plural_guesses(1), "1 guess");
        assert_eq!(plural_guesses(4), "4 guesses");
    }
}
