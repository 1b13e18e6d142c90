//! Simple interactive CLI mode
//!
//! Line-based game of today's puzzle without the TUI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::GameError;
use crate::daily::CalendarDate;
use crate::game::{BoardLayout, GameSession, GameState, MAX_ATTEMPTS, PlayerId, SessionStore};
use crate::output::formatters::{KEYBOARD_ROWS, keyboard_row, plural_guesses};
use crate::output::{AnsiRenderer, BoardRenderer, EmojiRenderer};

/// Run the line-mode game for `player` on `date`
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails, or if the store
/// cannot pick an answer for `date`.
pub fn run_simple(store: &SessionStore, player: &PlayerId, date: CalendarDate) -> Result<()> {
    let number = store.selector().puzzle_number(date);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Daily Puzzle                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Puzzle {number} ({date}). Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!("Commands: ':board' to redraw, ':share' for share text, ':new' to restart, ':quit' to exit\n");

    let started = store
        .resume_or_start(player, date)
        .context("failed to start today's puzzle")?;
    if started.resumed {
        println!("🔄 Resuming your session - enter a word to continue.\n");
        print_session(&started.session);
    }

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!();
            return Ok(());
        };

        match parse_line(&input) {
            LineInput::Empty => {}
            LineInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineInput::Board => {
                if let Some(session) = store.session(player) {
                    print_session(&session);
                }
            }
            LineInput::Share => {
                if let Some(board) = store.current_board(player) {
                    let text = EmojiRenderer::for_puzzle(number).render(&board, &BoardLayout::STANDARD);
                    println!("\n{text}\n");
                }
            }
            LineInput::New => {
                store
                    .start_session(player, date)
                    .context("failed to restart the puzzle")?;
                println!("\n🔄 New game started!\n");
            }
            LineInput::Guess(guess) => match store.submit_guess(player, &guess) {
                Ok(outcome) => {
                    if let Some(session) = store.session(player) {
                        print_session(&session);
                    }
                    match outcome.state {
                        GameState::Won => print_win(outcome.attempt),
                        GameState::Lost => {
                            let answer = store.answer_for(date)?;
                            println!(
                                "\n{} The word was {}.\n",
                                "❌ Out of guesses!".red().bold(),
                                answer.text().bright_yellow().bold()
                            );
                        }
                        GameState::InProgress => {}
                    }
                }
                Err(GameError::SessionTerminated(state)) => {
                    println!("Game already {state}. Type ':new' to play again or ':quit' to exit.\n");
                }
                Err(GameError::NoActiveSession(_)) => {
                    store.start_session(player, date)?;
                    println!("Session expired, started a new one.\n");
                }
                Err(GameError::Validation(e)) => println!("❌ {e}\n"),
            },
        }
    }
}

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineInput {
    Empty,
    Quit,
    Board,
    Share,
    New,
    Guess(String),
}

/// Commands start with ':' or are a single letter, so no five-letter word is
/// ever mistaken for one
fn parse_line(input: &str) -> LineInput {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => LineInput::Empty,
        ":quit" | ":q" | "q" | "quit" | "exit" => LineInput::Quit,
        ":board" | ":b" | "b" => LineInput::Board,
        ":share" | ":s" | "s" => LineInput::Share,
        ":new" | ":n" | "n" => LineInput::New,
        _ => LineInput::Guess(input.to_string()),
    }
}

fn print_session(session: &GameSession) {
    println!();
    for line in AnsiRenderer.render(session.board(), &BoardLayout::STANDARD) {
        println!("  {line}");
    }
    println!();
    let states = session.letter_states();
    for row in KEYBOARD_ROWS {
        println!("  {}", keyboard_row(row, &states));
    }
    println!(
        "\n  {} left\n",
        plural_guesses(session.attempts_remaining()).bright_black()
    );
}

fn print_win(attempt: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match attempt {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Phew!"),
    };
    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {}. Type ':share' for your result.\n",
        plural_guesses(attempt).bright_cyan().bold()
    );
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;
    use crate::wordlists::loader::embedded_bank;
    use std::sync::Arc;

    #[test]
    fn prefixed_and_short_commands() {
        assert_eq!(parse_line(":board"), LineInput::Board);
        assert_eq!(parse_line("b"), LineInput::Board);
        assert_eq!(parse_line(":SHARE"), LineInput::Share);
        assert_eq!(parse_line(":new"), LineInput::New);
        assert_eq!(parse_line("quit"), LineInput::Quit);
        assert_eq!(parse_line(":q"), LineInput::Quit);
        assert_eq!(parse_line("   "), LineInput::Empty);
    }

    #[test]
    fn five_letter_command_names_are_guesses() {
        assert_eq!(parse_line("board"), LineInput::Guess("board".to_string()));
        assert_eq!(parse_line("Share"), LineInput::Guess("Share".to_string()));
        assert_eq!(parse_line(" crane "), LineInput::Guess("crane".to_string()));
    }

    #[test]
    fn board_and_share_use_an_attempt() {
        let store =
            SessionStore::new(Arc::new(embedded_bank().unwrap()), SessionConfig::default())
                .unwrap();
        let player = PlayerId::from("line");
        store.start_session(&player, "2021-06-19".parse().unwrap()).unwrap();

        for (i, line) in ["board", "share"].into_iter().enumerate() {
            let LineInput::Guess(guess) = parse_line(line) else {
                panic!("{line} was not treated as a guess");
            };
            let outcome = store.submit_guess(&player, &guess).unwrap();
            assert_eq!(outcome.attempt, i + 1);
        }
        let session = store.session(&player).unwrap();
        assert_eq!(session.guesses()[0].text(), "BOARD");
        assert_eq!(session.guesses()[1].text(), "SHARE");
    }
}
