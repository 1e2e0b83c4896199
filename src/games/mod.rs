//! Playable games
//!
//! Defines the Game trait and the concrete games behind it.

mod snake;
mod sudoku;
pub mod word_guess;

pub use snake::SnakeGame;
pub use sudoku::SudokuGame;
pub use word_guess::{WordGuessConfig, WordGuessGame};

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that end a session without a result
#[derive(Debug, Error)]
pub enum GameError {
    #[error("input ended before the game finished")]
    InputClosed,
    #[error("no secret words available")]
    EmptyWordList,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A game the menu can launch
pub trait Game {
    /// Stable display name, also used as the history key
    fn name(&self) -> &str;

    /// Play one session reading lines from `input` and writing to `output`
    ///
    /// Returns the score, or `None` for games that don't keep score.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the session cannot be completed.
    fn play(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Option<u32>, GameError>;
}

/// Enum wrapper for all games
///
/// Allows runtime selection of a game while maintaining static dispatch.
pub enum GameKind {
    WordGuess(WordGuessGame),
    Snake(SnakeGame),
    Sudoku(SudokuGame),
}

impl Game for GameKind {
    fn name(&self) -> &str {
        match self {
            Self::WordGuess(g) => g.name(),
            Self::Snake(g) => g.name(),
            Self::Sudoku(g) => g.name(),
        }
    }

    fn play(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Option<u32>, GameError> {
        match self {
            Self::WordGuess(g) => g.play(input, output),
            Self::Snake(g) => g.play(input, output),
            Self::Sudoku(g) => g.play(input, output),
        }
    }
}

impl GameKind {
    /// Every game, in menu order
    #[must_use]
    pub fn all(config: WordGuessConfig) -> Vec<Self> {
        vec![
            Self::WordGuess(WordGuessGame::new(config)),
            Self::Snake(SnakeGame),
            Self::Sudoku(SudokuGame),
        ]
    }

    /// Create a game from a name
    ///
    /// Matches the display name or a short key, ignoring case:
    /// "word", "wordguess", "word guess", "word-guess", "snake", "sudoku".
    #[must_use]
    pub fn from_name(name: &str, config: WordGuessConfig) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "word" | "wordguess" | "word guess" | "word-guess" | "word_guess" => {
                Some(Self::WordGuess(WordGuessGame::new(config)))
            }
            "snake" => Some(Self::Snake(SnakeGame)),
            "sudoku" => Some(Self::Sudoku(SudokuGame)),
            _ => None,
        }
    }

    /// One-line description for listings
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::WordGuess(_) => "Guess the secret 5-letter word",
            Self::Snake(_) => "Classic snake (coming soon, unscored)",
            Self::Sudoku(_) => "Number placement puzzle (coming soon, unscored)",
        }
    }
}
