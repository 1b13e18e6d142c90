//! Today command
//!
//! Looks up which puzzle a date maps to.

use crate::core::{ConfigError, Word};
use crate::daily::{CalendarDate, DailyAnswerSelector};
use crate::wordlists::WordBank;

/// Which puzzle a date maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub date: CalendarDate,
    /// Days since the epoch
    pub number: i64,
    /// Position of the answer in the bank
    pub index: usize,
    pub bank_size: usize,
    pub answer: Word,
}

/// Look up the puzzle for `date`
///
/// # Errors
/// Returns `ConfigError::EmptyWordBank` if the bank is empty.
pub fn puzzle_for(
    date: CalendarDate,
    bank: &WordBank,
    selector: &DailyAnswerSelector,
) -> Result<PuzzleInfo, ConfigError> {
    let index = selector.index_for(date, bank.size())?;
    let answer = selector.select(date, bank)?.clone();
    Ok(PuzzleInfo {
        date,
        number: selector.puzzle_number(date),
        index,
        bank_size: bank.size(),
        answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::EPOCH;
    use crate::wordlists::loader::embedded_bank;

    #[test]
    fn epoch_is_puzzle_zero() {
        let bank = embedded_bank().unwrap();
        let info = puzzle_for(EPOCH, &bank, &DailyAnswerSelector::new()).unwrap();
        assert_eq!(info.number, 0);
        assert_eq!(info.index, 0);
        assert_eq!(info.answer.text(), "CIGAR");
        assert_eq!(info.bank_size, bank.size());
    }

    #[test]
    fn index_wraps_but_number_keeps_counting() {
        let bank = embedded_bank().unwrap();
        let date = EPOCH.add_days(bank.size() as i64 + 1);
        let info = puzzle_for(date, &bank, &DailyAnswerSelector::new()).unwrap();
        assert_eq!(info.number, bank.size() as i64 + 1);
        assert_eq!(info.index, 1);
        assert_eq!(info.answer.text(), "REBUT");
    }
}
