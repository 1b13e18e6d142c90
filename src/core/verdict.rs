//! Guess scoring
//!
//! A guess scored against the answer yields one [`Verdict`] per letter:
//! - Correct: right letter, right position (green)
//! - Present: letter is in the answer elsewhere (yellow)
//! - Absent: letter is not in the answer, or every copy is already accounted for (gray)

use std::fmt;
use std::ops::Index;

use super::error::ScoreError;
use super::word::{WORD_LENGTH, Word};

/// Per-letter verdict for a scored guess
///
/// Ordered by strength so the best verdict seen for a letter can be taken with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII symbol: G, Y or -
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for one guess, one per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Score `guess` against `answer`
    ///
    /// Implements Wordle's duplicate-letter rules: a letter is only marked as many
    /// times as it occurs in the answer, and exact matches claim their copies first.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = Verdict::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows from whatever the greens left over
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&v| v == Verdict::Present).count()
    }

    /// Parse feedback from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = Verdict::from_char(ch)?;
        }
        Some(Self(result))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Verdict::emoji).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, position: usize) -> &Verdict {
        &self.0[position]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.iter() {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score a raw guess string against a raw answer string
///
/// Both sides are validated and case-normalized first.
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if either string is not five ASCII letters.
///
/// # Examples
/// ```
/// use wordle_daily::core::{score, Verdict};
///
/// let feedback = score("boobs", "ROBOT").unwrap();
/// assert_eq!(feedback[1], Verdict::Correct);
/// assert!(score("boo", "robot").is_err());
/// ```
pub fn score(guess: &str, answer: &str) -> Result<Feedback, ScoreError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Feedback::calculate(&guess, &answer))
}
