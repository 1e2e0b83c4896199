//! Terminal output formatting
//!
//! Display utilities for game sessions, menus and play history.

pub mod display;
pub mod formatters;

pub use display::write_history;
