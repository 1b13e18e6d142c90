//! Daily answer selection
//!
//! The answer for a date is `bank[days_since(EPOCH, date) mod bank.size()]`, using a
//! Euclidean modulo so dates before the epoch still land inside the bank.

use super::CalendarDate;
use crate::core::{ConfigError, Word};
use crate::wordlists::WordBank;

/// Puzzle #0 falls on this date
pub const EPOCH: CalendarDate = CalendarDate::ymd(2021, 6, 19);

/// Maps calendar dates to positions in a word bank
///
/// Pure and deterministic: the result depends only on the epoch, the date and the
/// bank, never on the clock or a random seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAnswerSelector {
    epoch: CalendarDate,
}

impl Default for DailyAnswerSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyAnswerSelector {
    /// Selector counting from [`EPOCH`]
    #[must_use]
    pub const fn new() -> Self {
        Self { epoch: EPOCH }
    }

    /// Selector counting from a different day
    #[must_use]
    pub const fn with_epoch(epoch: CalendarDate) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub const fn epoch(&self) -> CalendarDate {
        self.epoch
    }

    /// Whole days from the epoch to `date`; negative before the epoch
    #[must_use]
    pub const fn puzzle_number(&self, date: CalendarDate) -> i64 {
        self.epoch.days_until(date)
    }

    /// Position in a bank of `size` words for `date`
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if `size` is zero.
    pub fn index_for(&self, date: CalendarDate, size: usize) -> Result<usize, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyWordBank);
        }
        Ok(self.puzzle_number(date).rem_euclid(size as i64) as usize)
    }

    /// The answer for `date`
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the bank is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::daily::{CalendarDate, DailyAnswerSelector};
    /// use wordle_daily::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_words(["cigar", "rebut", "sissy"]).unwrap();
    /// let selector = DailyAnswerSelector::new();
    ///
    /// let day = CalendarDate::new(2021, 6, 20).unwrap();
    /// assert_eq!(selector.select(day, &bank).unwrap().text(), "REBUT");
    /// ```
    pub fn select<'b>(
        &self,
        date: CalendarDate,
        bank: &'b WordBank,
    ) -> Result<&'b Word, ConfigError> {
        let index = self.index_for(date, bank.size())?;
        bank.at(index).ok_or(ConfigError::EmptyWordBank)
    }
}

/// The answer for `date` counting from [`EPOCH`]
///
/// # Errors
/// Returns `ConfigError::EmptyWordBank` if the bank is empty.
pub fn select(date: CalendarDate, bank: &WordBank) -> Result<&Word, ConfigError> {
    DailyAnswerSelector::new().select(date, bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_bank;

    fn small_bank() -> WordBank {
        WordBank::from_words(["cigar", "rebut", "sissy"]).unwrap()
    }

    #[test]
    fn epoch_is_a_real_date() {
        let checked =
            CalendarDate::new(EPOCH.year(), EPOCH.month(), EPOCH.day()).unwrap();
        assert_eq!(checked, EPOCH);
    }

    #[test]
    fn epoch_selects_first_word() {
        let bank = embedded_bank().unwrap();
        assert_eq!(select(EPOCH, &bank).unwrap().text(), "CIGAR");
        assert_eq!(select(EPOCH.add_days(1), &bank).unwrap().text(), "REBUT");
    }

    #[test]
    fn same_date_same_answer() {
        let bank = embedded_bank().unwrap();
        let date: CalendarDate = "2026-10-17".parse().unwrap();

        let first = select(date, &bank).unwrap().clone();
        for _ in 0..10 {
            assert_eq!(select(date, &bank).unwrap(), &first);
        }
        // A fresh selector and a fresh bank agree too
        let again = embedded_bank().unwrap();
        assert_eq!(DailyAnswerSelector::default().select(date, &again).unwrap(), &first);
    }

    #[test]
    fn wraps_after_bank_size_days() {
        let bank = small_bank();
        let selector = DailyAnswerSelector::new();
        assert_eq!(selector.index_for(EPOCH.add_days(3), 3).unwrap(), 0);
        assert_eq!(selector.index_for(EPOCH.add_days(5), 3).unwrap(), 2);
        assert_eq!(
            selector.select(EPOCH.add_days(4), &bank).unwrap().text(),
            "REBUT"
        );
    }

    #[test]
    fn dates_before_epoch_use_true_modulo() {
        let selector = DailyAnswerSelector::new();
        assert_eq!(selector.puzzle_number(EPOCH.add_days(-1)), -1);
        assert_eq!(selector.index_for(EPOCH.add_days(-1), 3).unwrap(), 2);
        assert_eq!(selector.index_for(EPOCH.add_days(-3), 3).unwrap(), 0);
        assert_eq!(selector.index_for(EPOCH.add_days(-4), 3).unwrap(), 2);

        let bank = embedded_bank().unwrap();
        let before = select(EPOCH.add_days(-1), &bank).unwrap();
        assert_eq!(Some(before), bank.at(bank.size() - 1));
    }

    #[test]
    fn every_index_is_in_range() {
        let selector = DailyAnswerSelector::new();
        for offset in -2000..2000 {
            let index = selector.index_for(EPOCH.add_days(offset), 7).unwrap();
            assert!(index < 7);
        }
    }

    #[test]
    fn empty_bank_is_an_error() {
        let bank = WordBank::from_words(Vec::<&str>::new()).unwrap();
        assert!(matches!(select(EPOCH, &bank), Err(ConfigError::EmptyWordBank)));
    }

    #[test]
    fn custom_epoch_shifts_numbering() {
        let epoch: CalendarDate = "2022-01-01".parse().unwrap();
        let selector = DailyAnswerSelector::with_epoch(epoch);
        assert_eq!(selector.epoch(), epoch);
        assert_eq!(selector.puzzle_number(epoch), 0);
        assert_eq!(selector.select(epoch, &small_bank()).unwrap().text(), "CIGAR");
    }
}
