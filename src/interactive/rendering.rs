//! TUI rendering with ratatui
//!
//! Draws the tile board, the keyboard, messages and the input line.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::game::{GameState, MAX_ATTEMPTS, Tile};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and keyboard
            Constraint::Percentage(50), // Progress and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🟩 WORDLE {} - {}",
        app.puzzle_number, app.date
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Min(5),                          // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

const fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let typing_row = app.session.guess_count();

    let lines: Vec<Line> = board
        .rows()
        .enumerate()
        .map(|(row_index, row)| {
            let spans = row
                .iter()
                .enumerate()
                .flat_map(|(col, tile)| {
                    let cell = match *tile {
                        Tile::Scored { letter, verdict } => Span::styled(
                            format!(" {letter} "),
                            verdict_style(verdict).add_modifier(Modifier::BOLD),
                        ),
                        // Letters typed so far go on the next free row
                        Tile::Empty if row_index == typing_row => {
                            match app.input_buffer.chars().nth(col) {
                                Some(letter) => Span::styled(
                                    format!("[{letter}]"),
                                    Style::default()
                                        .fg(Color::Yellow)
                                        .add_modifier(Modifier::BOLD),
                                ),
                                None => Span::styled("[ ]", Style::default().fg(Color::Gray)),
                            }
                        }
                        Tile::Empty => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
                    };
                    [cell, Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.letter_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row
                .chars()
                .flat_map(|letter| {
                    let style = states.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&verdict| verdict_style(verdict),
                    );
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.guess_count();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;
    let color = match app.session.state() {
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
        GameState::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} used | {}", app.session.state()));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a 5-letter word | Enter to submit | Backspace to edit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.player)).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining = Paragraph::new(format!(
        "Remaining: {}",
        app.session.attempts_remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::CalendarDate;
    use crate::game::{PlayerId, SessionConfig, SessionStore};
    use crate::wordlists::loader::embedded_bank;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_status() {
        let store =
            SessionStore::new(Arc::new(embedded_bank().unwrap()), SessionConfig::default())
                .unwrap();
        let date: CalendarDate = "2021-06-19".parse().unwrap();
        let mut app = App::new(&store, PlayerId::from("alice"), date).unwrap();
        app.input_buffer = "CIGAR".to_string();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Board"));
        assert!(text.contains("Player: alice"));
        assert!(text.contains(" C "));
        assert!(text.contains("Game over"));
    }
}
