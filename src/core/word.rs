//! Five-letter word representation
//!
//! A Word is validated once on construction and normalized to uppercase, so every
//! comparison downstream can work on raw bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// A validated, uppercase five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - Length is not exactly 5 characters (`InvalidGuessLength`)
    /// - Any character is not an ASCII letter (`InvalidGuessFormat`)
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(ValidationError::InvalidGuessLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidGuessFormat(text.to_string()));
        }

        let text = text.to_ascii_uppercase();
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position] as char
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the available-letter pool during scoring.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
