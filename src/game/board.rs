//! The tile board a session writes its guesses into

use crate::core::{Feedback, Grid2D, Verdict, WORD_LENGTH, Word};

/// Guesses a player gets before the game is lost
pub const MAX_ATTEMPTS: usize = 6;

/// One cell of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Row not guessed yet
    #[default]
    Empty,
    Scored { letter: char, verdict: Verdict },
}

impl Tile {
    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Empty => None,
            Self::Scored { verdict, .. } => Some(verdict),
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Scored { letter, .. } => Some(letter),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// `MAX_ATTEMPTS x WORD_LENGTH` grid of tiles
pub type Board = Grid2D<Tile>;

/// A board with every tile empty
#[must_use]
pub fn empty_board() -> Board {
    Grid2D::new(MAX_ATTEMPTS, WORD_LENGTH, Tile::Empty)
}

/// Tiles for one scored guess
#[must_use]
pub fn scored_row(guess: &Word, feedback: &Feedback) -> [Tile; WORD_LENGTH] {
    std::array::from_fn(|i| Tile::Scored {
        letter: guess.char_at(i),
        verdict: feedback[i],
    })
}

/// Board dimensions a renderer needs to lay out tiles without knowing the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl BoardLayout {
    pub const STANDARD: Self = Self {
        word_length: WORD_LENGTH,
        max_attempts: MAX_ATTEMPTS,
    };
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_standard_shape() {
        let board = empty_board();
        assert_eq!(board.shape(), (MAX_ATTEMPTS, WORD_LENGTH));
        assert!(board.rows().flatten().all(|tile| tile.is_empty()));
    }

    #[test]
    fn scored_row_pairs_letters_with_verdicts() {
        let guess = Word::new("boobs").unwrap();
        let answer = Word::new("robot").unwrap();
        let row = scored_row(&guess, &Feedback::calculate(&guess, &answer));

        assert_eq!(row[1].letter(), Some('O'));
        assert_eq!(row[1].verdict(), Some(Verdict::Correct));
        assert_eq!(row[4].verdict(), Some(Verdict::Absent));
        assert!(!row[0].is_empty());
    }

    #[test]
    fn empty_tile_has_no_content() {
        assert_eq!(Tile::default(), Tile::Empty);
        assert_eq!(Tile::Empty.letter(), None);
        assert_eq!(Tile::Empty.verdict(), None);
    }
}
