//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::core::{ConfigError, GameError, WORD_LENGTH};
use crate::daily::CalendarDate;
use crate::game::{BoardLayout, GameSession, GameState, MAX_ATTEMPTS, PlayerId, SessionStore};
use crate::output::{BoardRenderer, EmojiRenderer};

/// Application state
pub struct App<'a> {
    pub store: &'a SessionStore,
    pub player: PlayerId,
    pub date: CalendarDate,
    pub puzzle_number: i64,
    pub session: GameSession,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished during this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Indexed by winning attempt, 1..=6
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl<'a> App<'a> {
    /// Open `player`'s session for `date`, resuming it if one exists
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if the store cannot pick an answer.
    pub fn new(
        store: &'a SessionStore,
        player: PlayerId,
        date: CalendarDate,
    ) -> Result<Self, ConfigError> {
        let started = store.resume_or_start(&player, date)?;
        let puzzle_number = store.selector().puzzle_number(date);
        let input_mode = if started.session.state().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };

        let mut app = Self {
            store,
            player,
            date,
            puzzle_number,
            session: started.session,
            input_mode,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        if started.resumed {
            app.add_message(
                "Resuming your session - enter a word to continue.",
                MessageStyle::Info,
            );
        } else {
            app.add_message(
                &format!("Puzzle {puzzle_number}: guess the word in {MAX_ATTEMPTS} tries."),
                MessageStyle::Info,
            );
        }
        Ok(app)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    /// Submit the typed word to the store
    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message(
                &format!("Word must be exactly {WORD_LENGTH} letters!"),
                MessageStyle::Error,
            );
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match self.store.submit_guess(&self.player, &guess) {
            Ok(outcome) => {
                self.refresh_session();
                match outcome.state {
                    GameState::Won => self.finish_game(true, outcome.attempt),
                    GameState::Lost => self.finish_game(false, outcome.attempt),
                    GameState::InProgress => {}
                }
            }
            Err(GameError::Validation(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
            }
            Err(GameError::SessionTerminated(_)) => {
                self.input_mode = InputMode::GameOver;
                self.add_message("Game over. Press 'n' for a new game.", MessageStyle::Info);
            }
            Err(GameError::NoActiveSession(_)) => {
                self.add_message("Session expired, starting over.", MessageStyle::Error);
                self.new_game();
            }
        }
    }

    /// Restart today's puzzle from an empty board
    pub fn new_game(&mut self) {
        match self.store.start_session(&self.player, self.date) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Share text for the current board
    #[must_use]
    pub fn share_text(&self) -> String {
        EmojiRenderer::for_puzzle(self.puzzle_number)
            .render(self.session.board(), &BoardLayout::STANDARD)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn refresh_session(&mut self) {
        if let Some(session) = self.store.session(&self.player) {
            self.session = session;
        }
    }

    fn finish_game(&mut self, won: bool, attempt: usize) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;

        if won {
            self.stats.games_won += 1;
            self.stats.guess_distribution[attempt] += 1;
            let celebration = match attempt {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let answer = self.session.answer().text().to_string();
            self.add_message(&format!("Out of guesses! The word was {answer}."), MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// The share text is printed after the terminal is restored so it can be copied.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text if the last game was finished
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app
        .session
        .state()
        .is_terminal()
        .then(|| app.share_text()))
}
