//! Word list loading utilities
//!
//! Builds a [`WordBank`] from a file or from the embedded list. Unlike a guess list,
//! an answer list is not allowed to silently drop bad lines: a malformed entry fails
//! the load so the problem surfaces at startup.

use std::fs;
use std::path::Path;

use log::info;

use super::{ANSWERS, WordBank};
use crate::core::ConfigError;

/// Load a bank from a file with one word per line
///
/// Blank lines and lines starting with `#` are skipped; everything else must be a
/// valid five-letter word.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, or
/// `ConfigError::InvalidWordBank` for the first malformed entry.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", bank.size());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = parse_word_list(&content)?;
    info!("loaded {} words from {}", bank.size(), path.display());
    Ok(bank)
}

/// Parse word-list text, one word per line
///
/// Line numbers in errors refer to non-skipped entries.
///
/// # Errors
///
/// Returns `ConfigError::InvalidWordBank` for the first malformed entry.
pub fn parse_word_list(content: &str) -> Result<WordBank, ConfigError> {
    WordBank::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Convert an embedded string slice to a bank
///
/// # Errors
///
/// Returns `ConfigError::InvalidWordBank` if the slice holds a malformed entry.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::bank_from_slice;
/// use wordle_daily::wordlists::ANSWERS;
///
/// let bank = bank_from_slice(ANSWERS).unwrap();
/// assert_eq!(bank.size(), ANSWERS.len());
/// ```
pub fn bank_from_slice(slice: &[&str]) -> Result<WordBank, ConfigError> {
    WordBank::from_words(slice.iter().copied())
}

/// The answer list compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded list itself is malformed.
pub fn embedded_bank() -> Result<WordBank, ConfigError> {
    bank_from_slice(ANSWERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_from_slice_converts_valid_words() {
        let bank = bank_from_slice(&["crane", "slate", "irate"]).unwrap();

        assert_eq!(bank.size(), 3);
        assert_eq!(bank.at(1).unwrap().text(), "SLATE");
    }

    #[test]
    fn bank_from_slice_fails_on_invalid() {
        let err = bank_from_slice(&["crane", "toolong", "abc", "slate"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWordBank { line: 2, .. }));
    }

    #[test]
    fn parse_word_list_skips_blank_and_comment_lines() {
        let text = "# daily answers\ncigar\n\n  rebut  \n# end\nsissy\n";
        let bank = parse_word_list(text).unwrap();

        let words: Vec<&str> = bank.iter().map(crate::core::Word::text).collect();
        assert_eq!(words, ["CIGAR", "REBUT", "SISSY"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/answers.txt").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_daily_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "cigar\nrebut\n").unwrap();

        let bank = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(bank.size(), 2);
        assert!(bank.contains("rebut"));
    }

    #[test]
    fn load_from_embedded_answers() {
        let bank = embedded_bank().unwrap();
        assert_eq!(bank.size(), ANSWERS.len());
    }
}
