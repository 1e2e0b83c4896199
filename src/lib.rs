//! Word Arcade
//!
//! A text-console mini-game suite: a word-guessing game, placeholder games, and
//! a play history that persists per-game statistics across runs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::io::{self, Write};
//! use std::path::Path;
//! use word_arcade::games::{Game, WordGuessGame};
//! use word_arcade::history::HistoryStore;
//!
//! let path = Path::new("game_history.json");
//! let mut store = HistoryStore::load(path);
//!
//! let mut game = WordGuessGame::default();
//! let score = game.play(&mut io::stdin().lock(), &mut io::stdout()).unwrap();
//!
//! store.record_play(game.name(), score);
//! store.save(path).unwrap();
//! ```

// Core domain types
pub mod core;

// Secret word lists
pub mod wordlists;

// Games and the Game trait
pub mod games;

// Play history
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
