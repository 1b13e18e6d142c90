//! Validated, read-only answer list
//!
//! The bank is built once at startup and shared between every session.

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{ConfigError, Word};

/// Ordered list of valid answers
///
/// Every entry is five ASCII letters and appears once. There is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: Vec<Word>,
    positions: FxHashMap<Word, usize>,
}

impl WordBank {
    /// Build a bank from raw entries, keeping their order
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWordBank` for the first entry that is not five
    /// letters, contains anything other than A-Z, or repeats an earlier entry.
    /// Line numbers in the error are 1-based positions in `entries`.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_words(["cigar", "rebut"]).unwrap();
    /// assert_eq!(bank.size(), 2);
    /// assert!(bank.contains("REBUT"));
    ///
    /// assert!(WordBank::from_words(["cigar", "cigars"]).is_err());
    /// ```
    pub fn from_words<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut positions = FxHashMap::default();

        for (i, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref();
            let invalid = |reason: String| ConfigError::InvalidWordBank {
                line: i + 1,
                entry: entry.to_string(),
                reason,
            };

            let word = Word::new(entry).map_err(|e| invalid(e.to_string()))?;
            if let Some(first) = positions.get(&word) {
                return Err(invalid(format!("duplicate of line {}", first + 1)));
            }

            positions.insert(word.clone(), words.len());
            words.push(word);
        }

        debug!("word bank built with {} entries", words.len());
        Ok(Self { words, positions })
    }

    /// Whether `word` is in the bank (case-insensitive)
    ///
    /// Malformed input is simply not contained.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Index of `word` in the bank
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        let word = Word::new(word).ok()?;
        self.positions.get(&word).copied()
    }

    /// Whether an already-validated word is in the bank
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.positions.contains_key(word)
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Answer at `index`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter()
    }

    /// Borrow all answers in order
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_keeps_order() {
        let bank = WordBank::from_words(["crane", "slate", "irate"]).unwrap();

        assert_eq!(bank.size(), 3);
        assert_eq!(bank.at(0).unwrap().text(), "CRANE");
        assert_eq!(bank.at(2).unwrap().text(), "IRATE");
        assert_eq!(bank.at(3), None);
        assert_eq!(bank.position("slate"), Some(1));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let bank = WordBank::from_words(["crane"]).unwrap();
        assert!(bank.contains("crane"));
        assert!(bank.contains("CrAnE"));
        assert!(!bank.contains("slate"));
        assert!(!bank.contains("cran"));
        assert!(bank.contains_word(&Word::new("CRANE").unwrap()));
    }

    #[test]
    fn from_words_rejects_bad_length() {
        let err = WordBank::from_words(["crane", "toolong"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWordBank { line: 2, ref entry, .. } if entry == "toolong"
        ));
    }

    #[test]
    fn from_words_rejects_non_alphabetic() {
        let err = WordBank::from_words(["cr4ne"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWordBank { line: 1, .. }));
    }

    #[test]
    fn from_words_rejects_duplicates_ignoring_case() {
        let err = WordBank::from_words(["crane", "slate", "CRANE"]).unwrap_err();
        match err {
            ConfigError::InvalidWordBank { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "duplicate of line 1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_bank_is_allowed_but_empty() {
        let bank = WordBank::from_words(Vec::<String>::new()).unwrap();
        assert!(bank.is_empty());
        assert_eq!(bank.iter().count(), 0);
    }
}
