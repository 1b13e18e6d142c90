//! Board renderers
//!
//! A renderer only sees the tile grid and its layout. It never needs to know how
//! a guess was scored.

use colored::Colorize;

use crate::core::Verdict;
use crate::game::{Board, BoardLayout, Tile};

/// Turns a board snapshot into something displayable
pub trait BoardRenderer {
    type Output;

    fn render(&self, board: &Board, layout: &BoardLayout) -> Self::Output;
}

/// Spoiler-free share text
///
/// ```text
/// Wordle 215 3/6
///
/// ⬜🟨⬜⬜⬜
/// 🟨🟩🟨⬜⬜
/// 🟩🟩🟩🟩🟩
/// ```
///
/// Empty rows are left out. The score is `X` when every row is used without a
/// win, and `-` while the game is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmojiRenderer {
    pub puzzle_number: Option<i64>,
}

impl EmojiRenderer {
    #[must_use]
    pub const fn for_puzzle(puzzle_number: i64) -> Self {
        Self {
            puzzle_number: Some(puzzle_number),
        }
    }

    fn header(&self, rows: &[String], won_at: Option<usize>, layout: &BoardLayout) -> String {
        let score = match won_at {
            Some(attempt) => attempt.to_string(),
            None if rows.len() == layout.max_attempts => "X".to_string(),
            None => "-".to_string(),
        };
        match self.puzzle_number {
            Some(n) => format!("Wordle {n} {score}/{}", layout.max_attempts),
            None => format!("Wordle {score}/{}", layout.max_attempts),
        }
    }
}

impl BoardRenderer for EmojiRenderer {
    type Output = String;

    fn render(&self, board: &Board, layout: &BoardLayout) -> String {
        let mut rows = Vec::with_capacity(layout.max_attempts);
        let mut won_at = None;

        for row in board.rows().take(layout.max_attempts) {
            if row.iter().all(|tile| tile.is_empty()) {
                break;
            }
            rows.push(
                row.iter()
                    .map(|tile| tile.verdict().unwrap_or(Verdict::Absent).emoji())
                    .collect::<String>(),
            );
            if won_at.is_none() && row.iter().all(|t| t.verdict() == Some(Verdict::Correct)) {
                won_at = Some(rows.len());
            }
        }

        let mut out = self.header(&rows, won_at, layout);
        if !rows.is_empty() {
            out.push_str("\n\n");
            out.push_str(&rows.join("\n"));
        }
        out
    }
}

/// Colored letter tiles for a plain terminal, one line per attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiRenderer;

impl AnsiRenderer {
    fn tile(tile: Tile) -> String {
        match tile {
            Tile::Empty => "[ ]".bright_black().to_string(),
            Tile::Scored { letter, verdict } => {
                let text = format!(" {letter} ");
                match verdict {
                    Verdict::Correct => text.black().on_green().bold().to_string(),
                    Verdict::Present => text.black().on_yellow().bold().to_string(),
                    Verdict::Absent => text.white().on_bright_black().to_string(),
                }
            }
        }
    }
}

impl BoardRenderer for AnsiRenderer {
    type Output = Vec<String>;

    fn render(&self, board: &Board, layout: &BoardLayout) -> Vec<String> {
        board
            .rows()
            .take(layout.max_attempts)
            .map(|row| {
                row.iter()
                    .take(layout.word_length)
                    .map(|&tile| Self::tile(tile))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;

    fn played(answer: &str, guesses: &[&str]) -> Board {
        let mut session = GameSession::new(Word::new(answer).unwrap());
        for guess in guesses {
            session.submit_guess(guess).unwrap();
        }
        session.current_board()
    }

    #[test]
    fn share_text_for_a_win() {
        let board = played("robot", &["crane", "boobs", "robot"]);
        let text = EmojiRenderer::for_puzzle(215).render(&board, &BoardLayout::STANDARD);

        assert_eq!(
            text,
            "Wordle 215 3/6\n\n⬜🟨⬜⬜⬜\n🟨🟩🟨⬜⬜\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_for_a_loss() {
        let board = played(
            "robot",
            &["crane", "slate", "audio", "pinky", "fjord", "lymph"],
        );
        let text = EmojiRenderer::for_puzzle(3).render(&board, &BoardLayout::STANDARD);

        assert!(text.starts_with("Wordle 3 X/6\n\n"));
        assert_eq!(text.lines().count(), 2 + 6);
    }

    #[test]
    fn share_text_skips_empty_rows() {
        let board = played("robot", &["crane"]);
        let text = EmojiRenderer::default().render(&board, &BoardLayout::STANDARD);
        assert_eq!(text, "Wordle -/6\n\n⬜🟨⬜⬜⬜");

        let fresh = played("robot", &[]);
        assert_eq!(
            EmojiRenderer::default().render(&fresh, &BoardLayout::STANDARD),
            "Wordle -/6"
        );
    }

    #[test]
    fn ansi_renders_every_row() {
        colored::control::set_override(false);
        let board = played("robot", &["boobs"]);
        let lines = AnsiRenderer.render(&board, &BoardLayout::STANDARD);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], " B   O   O   B   S ");
        assert_eq!(lines[1], "[ ] [ ] [ ] [ ] [ ]");
    }
}
