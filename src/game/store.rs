//! Session store keyed by player
//!
//! The single owner of every live [`GameSession`]. Each entry is locked while a
//! guess is applied, so one player's guesses are processed one at a time while
//! different players proceed in parallel. The word bank is shared read-only.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::{debug, info};

use super::board::Board;
use super::session::{GameSession, GuessOutcome, SessionConfig};
use crate::core::{ConfigError, GameError, Word};
use crate::daily::{CalendarDate, DailyAnswerSelector};
use crate::wordlists::WordBank;

/// Identity of a player, as given by the front-end (chat user id, terminal user, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A session handed back by [`SessionStore::resume_or_start`]
#[derive(Debug, Clone)]
pub struct StartedSession {
    pub session: GameSession,
    /// True if an existing session for the same day was picked up
    pub resumed: bool,
}

/// Owns one session per player
pub struct SessionStore {
    bank: Arc<WordBank>,
    selector: DailyAnswerSelector,
    config: SessionConfig,
    sessions: DashMap<PlayerId, GameSession>,
}

impl SessionStore {
    /// Create a store serving daily puzzles from `bank`
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the bank has no words.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_daily::daily::CalendarDate;
    /// use wordle_daily::game::{GameState, PlayerId, SessionConfig, SessionStore};
    /// use wordle_daily::wordlists::WordBank;
    ///
    /// let bank = Arc::new(WordBank::from_words(["cigar", "rebut"]).unwrap());
    /// let store = SessionStore::new(bank, SessionConfig::default()).unwrap();
    ///
    /// let player = PlayerId::from("alice");
    /// let day = CalendarDate::new(2021, 6, 19).unwrap();
    /// store.start_session(&player, day).unwrap();
    ///
    /// let outcome = store.submit_guess(&player, "cigar").unwrap();
    /// assert_eq!(outcome.state, GameState::Won);
    /// ```
    pub fn new(bank: Arc<WordBank>, config: SessionConfig) -> Result<Self, ConfigError> {
        if bank.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        Ok(Self {
            bank,
            selector: DailyAnswerSelector::new(),
            config,
            sessions: DashMap::new(),
        })
    }

    /// Use a different epoch for daily selection
    #[must_use]
    pub fn with_selector(mut self, selector: DailyAnswerSelector) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn selector(&self) -> &DailyAnswerSelector {
        &self.selector
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// The answer every player gets on `date`
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the bank is empty.
    pub fn answer_for(&self, date: CalendarDate) -> Result<&Word, ConfigError> {
        self.selector.select(date, &self.bank)
    }

    /// Start a fresh session for `player`, replacing any existing one
    ///
    /// Returns a snapshot of the new session.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the bank is empty.
    pub fn start_session(
        &self,
        player: &PlayerId,
        date: CalendarDate,
    ) -> Result<GameSession, ConfigError> {
        let session = self.new_session(date)?;
        self.sessions.insert(player.clone(), session.clone());
        info!("player {player} started puzzle {}", self.selector.puzzle_number(date));
        Ok(session)
    }

    /// Pick up `player`'s session for `date`, or start one
    ///
    /// A stored session from a different day is replaced.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the bank is empty.
    pub fn resume_or_start(
        &self,
        player: &PlayerId,
        date: CalendarDate,
    ) -> Result<StartedSession, ConfigError> {
        match self.sessions.entry(player.clone()) {
            Entry::Occupied(entry) if entry.get().date() == Some(date) => {
                debug!("player {player} resumed puzzle {date}");
                Ok(StartedSession {
                    session: entry.get().clone(),
                    resumed: true,
                })
            }
            Entry::Occupied(mut entry) => {
                let session = self.new_session(date)?;
                entry.insert(session.clone());
                info!("player {player} moved on to puzzle {date}");
                Ok(StartedSession {
                    session,
                    resumed: false,
                })
            }
            Entry::Vacant(entry) => {
                let session = self.new_session(date)?;
                entry.insert(session.clone());
                info!("player {player} started puzzle {date}");
                Ok(StartedSession {
                    session,
                    resumed: false,
                })
            }
        }
    }

    /// Apply a guess to `player`'s session
    ///
    /// The session entry stays locked for the whole call.
    ///
    /// # Errors
    /// - `GameError::NoActiveSession` if the player has no session
    /// - anything [`GameSession::submit_guess`] rejects
    pub fn submit_guess(&self, player: &PlayerId, word: &str) -> Result<GuessOutcome, GameError> {
        let mut session = self
            .sessions
            .get_mut(player)
            .ok_or_else(|| GameError::NoActiveSession(player.clone()))?;
        session.submit_guess(word)
    }

    /// Snapshot of `player`'s session
    #[must_use]
    pub fn session(&self, player: &PlayerId) -> Option<GameSession> {
        self.sessions.get(player).map(|s| s.clone())
    }

    /// Snapshot of `player`'s board
    #[must_use]
    pub fn current_board(&self, player: &PlayerId) -> Option<Board> {
        self.sessions.get(player).map(|s| s.current_board())
    }

    /// Drop `player`'s session, returning it
    pub fn evict(&self, player: &PlayerId) -> Option<GameSession> {
        self.sessions.remove(player).map(|(_, session)| session)
    }

    /// Drop every session for a puzzle before `date`; returns how many went
    pub fn evict_before(&self, date: CalendarDate) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|_, session| {
            let stale = matches!(session.date(), Some(d) if d < date);
            if stale {
                evicted += 1;
            }
            !stale
        });
        if evicted > 0 {
            info!("evicted {evicted} sessions from before {date}");
        }
        evicted
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn new_session(&self, date: CalendarDate) -> Result<GameSession, ConfigError> {
        let answer = self.answer_for(date)?.clone();
        let session = GameSession::new(answer).on_date(date);
        Ok(if self.config.require_known_word {
            session.with_dictionary(Arc::clone(&self.bank))
        } else {
            session
        })
    }
}
