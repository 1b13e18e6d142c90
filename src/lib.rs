//! Wordle Daily
//!
//! A daily five-letter word puzzle: every calendar day maps to one answer, each
//! player gets six guesses, and every guess is scored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_daily::daily::CalendarDate;
//! use wordle_daily::game::{BoardLayout, GameState, PlayerId, SessionConfig, SessionStore};
//! use wordle_daily::output::{BoardRenderer, EmojiRenderer};
//! use wordle_daily::wordlists::loader::embedded_bank;
//!
//! let store = SessionStore::new(Arc::new(embedded_bank().unwrap()), SessionConfig::default())
//!     .unwrap();
//! let player = PlayerId::from("alice");
//! let day = CalendarDate::new(2021, 6, 19).unwrap();
//!
//! store.start_session(&player, day).unwrap();
//! let outcome = store.submit_guess(&player, "crane").unwrap();
//! assert_eq!(outcome.state, GameState::InProgress);
//!
//! let board = store.current_board(&player).unwrap();
//! println!("{}", EmojiRenderer::for_puzzle(0).render(&board, &BoardLayout::STANDARD));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Dates and daily answer selection
pub mod daily;

// Sessions and the session store
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
