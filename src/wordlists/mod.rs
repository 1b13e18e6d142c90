//! Word lists for the daily puzzle
//!
//! Provides the embedded answer list and the validated [`WordBank`] built from it.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn answers_start_with_puzzle_zero() {
        assert_eq!(ANSWERS[0], "cigar");
        assert_eq!(ANSWERS[1], "rebut");
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 497, "Expected 497 answer words");
    }
}
