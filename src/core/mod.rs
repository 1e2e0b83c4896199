//! Core domain types for the word-guessing game
//!
//! This module contains the pure building blocks: word validation and
//! letters-in-common feedback. Nothing here performs I/O.

mod feedback;
mod word;

pub use feedback::CommonLetters;
pub use word::{WORD_LENGTH, Word, WordError, is_valid_guess};
