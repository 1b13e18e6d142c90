//! Per-player game session
//!
//! A session owns one answer and one board. It moves from `InProgress` to `Won` or
//! `Lost` and never back; every accepted guess fills exactly one board row.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::board::{Board, MAX_ATTEMPTS, empty_board, scored_row};
use crate::core::{Feedback, GameError, ValidationError, Verdict, Word};
use crate::daily::CalendarDate;
use crate::wordlists::WordBank;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Won or Lost; no more guesses are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub state: GameState,
    /// 1-based number of the guess just played
    pub attempt: usize,
}

/// Options applied to every session a store creates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reject guesses that are not in the word bank
    pub require_known_word: bool,
}

/// One player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    date: Option<CalendarDate>,
    board: Board,
    guesses: Vec<Word>,
    state: GameState,
    dictionary: Option<Arc<WordBank>>,
}

impl GameSession {
    /// Start a game with an empty board
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::game::{GameSession, GameState};
    ///
    /// let mut session = GameSession::new(Word::new("robot").unwrap());
    /// let outcome = session.submit_guess("boobs").unwrap();
    /// assert_eq!(outcome.feedback.to_string(), "YGY--");
    ///
    /// let outcome = session.submit_guess("robot").unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// assert_eq!(outcome.attempt, 2);
    /// ```
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            date: None,
            board: empty_board(),
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            state: GameState::InProgress,
            dictionary: None,
        }
    }

    /// Record which daily puzzle this session plays
    #[must_use]
    pub fn on_date(mut self, date: CalendarDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only accept guesses found in `bank`
    #[must_use]
    pub fn with_dictionary(mut self, bank: Arc<WordBank>) -> Self {
        self.dictionary = Some(bank);
        self
    }

    /// Score a guess and write it to the next board row
    ///
    /// Rejected guesses leave the session untouched and do not use an attempt.
    ///
    /// # Errors
    /// - `GameError::SessionTerminated` once the game is won or lost
    /// - `GameError::Validation` for a guess that is not five letters, contains
    ///   non-letters, or (with a dictionary) is not a known word
    ///
    /// # Panics
    /// Will not panic - an in-progress session always has a free board row.
    pub fn submit_guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        if self.state.is_terminal() {
            warn!("guess {word:?} rejected: session already {}", self.state);
            return Err(GameError::SessionTerminated(self.state));
        }

        let guess = Word::new(word)?;
        if let Some(bank) = &self.dictionary
            && !bank.contains_word(&guess)
        {
            return Err(ValidationError::NotInWordBank(guess.text().to_string()).into());
        }

        let feedback = Feedback::calculate(&guess, &self.answer);
        let row = self.guesses.len();
        self.board
            .set_row(row, &scored_row(&guess, &feedback))
            .expect("in-progress session has a free row");
        self.guesses.push(guess);

        self.state = if feedback.is_perfect() {
            GameState::Won
        } else if self.guesses.len() == MAX_ATTEMPTS {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        debug!(
            "guess {}/{MAX_ATTEMPTS} scored {feedback}, session {}",
            self.guesses.len(),
            self.state
        );

        Ok(GuessOutcome {
            feedback,
            state: self.state,
            attempt: self.guesses.len(),
        })
    }

    /// Snapshot of the board for renderers
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.board.clone()
    }

    /// Borrow the board without copying
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses accepted so far, in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.state.is_terminal() {
            0
        } else {
            MAX_ATTEMPTS - self.guesses.len()
        }
    }

    /// Feedback for each accepted guess, read back off the board
    #[must_use]
    pub fn feedback_rows(&self) -> Vec<Feedback> {
        self.board
            .rows()
            .take(self.guesses.len())
            .map(|row| {
                Feedback::new(std::array::from_fn(|i| {
                    row[i].verdict().unwrap_or(Verdict::Absent)
                }))
            })
            .collect()
    }

    /// Best verdict seen so far for every guessed letter
    ///
    /// Drives the on-screen keyboard: a letter once marked Correct stays Correct
    /// even if a later guess places it wrongly.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, Verdict> {
        let mut states: FxHashMap<char, Verdict> = FxHashMap::default();
        for tile in self.board.rows().flatten() {
            if let (Some(letter), Some(verdict)) = (tile.letter(), tile.verdict()) {
                states
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tile;

    fn session(answer: &str) -> GameSession {
        GameSession::new(Word::new(answer).unwrap())
    }

    const MISSES: [&str; 6] = ["crane", "slate", "audio", "pinky", "fjord", "lymph"];

    #[test]
    fn new_session_is_empty_and_in_progress() {
        let s = session("robot");
        assert_eq!(s.state(), GameState::InProgress);
        assert_eq!(s.guess_count(), 0);
        assert_eq!(s.attempts_remaining(), MAX_ATTEMPTS);
        assert!(s.current_board().rows().flatten().all(|t| t.is_empty()));
    }

    #[test]
    fn six_misses_lose_and_seventh_is_rejected() {
        let mut s = session("robot");
        for (i, word) in MISSES.iter().enumerate() {
            let outcome = s.submit_guess(word).unwrap();
            assert_eq!(outcome.attempt, i + 1);
            let expected = if i + 1 == MAX_ATTEMPTS {
                GameState::Lost
            } else {
                GameState::InProgress
            };
            assert_eq!(outcome.state, expected);
        }

        assert_eq!(
            s.submit_guess("robot"),
            Err(GameError::SessionTerminated(GameState::Lost))
        );
        assert_eq!(s.guess_count(), MAX_ATTEMPTS);
        assert_eq!(s.attempts_remaining(), 0);
    }

    #[test]
    fn exact_guess_wins_at_every_attempt() {
        for k in 1..=MAX_ATTEMPTS {
            let mut s = session("robot");
            for word in &MISSES[..k - 1] {
                s.submit_guess(word).unwrap();
            }
            let outcome = s.submit_guess("ROBOT").unwrap();
            assert_eq!(outcome.state, GameState::Won, "attempt {k}");
            assert_eq!(outcome.attempt, k);
            assert!(outcome.feedback.is_perfect());

            assert_eq!(
                s.submit_guess("crane"),
                Err(GameError::SessionTerminated(GameState::Won))
            );
            assert_eq!(s.guess_count(), k);
        }
    }

    #[test]
    fn invalid_guesses_do_not_use_an_attempt() {
        let mut s = session("robot");
        s.submit_guess("crane").unwrap();

        assert_eq!(
            s.submit_guess("boot"),
            Err(GameError::Validation(ValidationError::InvalidGuessLength(4)))
        );
        assert!(matches!(
            s.submit_guess("r0bot"),
            Err(GameError::Validation(ValidationError::InvalidGuessFormat(_)))
        ));
        assert!(s.submit_guess("robots").is_err());

        assert_eq!(s.guess_count(), 1);
        assert_eq!(s.state(), GameState::InProgress);
        assert!(s.board().row(1).unwrap().iter().all(|t| t.is_empty()));
    }

    #[test]
    fn dictionary_rejects_unknown_words() {
        let bank = Arc::new(WordBank::from_words(["robot", "crane"]).unwrap());
        let mut s = session("robot").with_dictionary(bank);

        assert_eq!(
            s.submit_guess("xyzzy"),
            Err(GameError::Validation(ValidationError::NotInWordBank(
                "XYZZY".to_string()
            )))
        );
        assert_eq!(s.guess_count(), 0);
        assert!(s.submit_guess("crane").is_ok());
    }

    #[test]
    fn rows_fill_top_to_bottom() {
        let mut s = session("robot");
        s.submit_guess("boobs").unwrap();
        s.submit_guess("crane").unwrap();

        let board = s.current_board();
        assert_eq!(
            board.get(0, 1),
            Ok(&Tile::Scored {
                letter: 'O',
                verdict: Verdict::Correct
            })
        );
        assert_eq!(board.get(1, 0).unwrap().letter(), Some('C'));
        assert!(board.row(2).unwrap().iter().all(|t| t.is_empty()));

        let rows = s.feedback_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_string(), "YGY--");
    }

    #[test]
    fn board_snapshot_is_detached() {
        let mut s = session("robot");
        let before = s.current_board();
        s.submit_guess("crane").unwrap();
        assert!(before.row(0).unwrap().iter().all(|t| t.is_empty()));
        assert_ne!(before, s.current_board());
    }

    #[test]
    fn letter_states_keep_best_verdict() {
        let mut s = session("robot");
        // O is only Present in ORBIT, then Correct in BOOBS
        s.submit_guess("orbit").unwrap();
        s.submit_guess("boobs").unwrap();

        let states = s.letter_states();
        assert_eq!(states.get(&'O'), Some(&Verdict::Correct));
        assert_eq!(states.get(&'S'), Some(&Verdict::Absent));
        assert_eq!(states.get(&'T'), Some(&Verdict::Correct));
        assert_eq!(states.get(&'Z'), None);
    }

    #[test]
    fn guesses_are_recorded_uppercase() {
        let mut s = session("robot");
        s.submit_guess("Crane").unwrap();
        assert_eq!(s.guesses()[0].text(), "CRANE");
    }

    #[test]
    fn game_state_display() {
        assert_eq!(GameState::InProgress.to_string(), "in progress");
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
        assert!(!GameState::InProgress.is_terminal());
    }
}
