//! Score command
//!
//! Scores a single guess against a given answer, outside of any session.

use crate::core::{Feedback, ScoreError, Word};

/// A guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Validate both words and score the guess
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if either word is not five ASCII letters.
pub fn score_guess(guess: &str, answer: &str) -> Result<ScoreResult, ScoreError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::calculate(&guess, &answer);
    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn scores_and_normalizes() {
        let result = score_guess("boobs", "Robot").unwrap();
        assert_eq!(result.guess.text(), "BOOBS");
        assert_eq!(result.answer.text(), "ROBOT");
        assert_eq!(result.feedback.to_string(), "YGY--");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            score_guess("boo", "robot"),
            Err(ScoreError::InvalidInput(ValidationError::InvalidGuessLength(3)))
        ));
        assert!(score_guess("robot", "r0bot").is_err());
    }
}
