//! Command implementations

pub mod history;
pub mod menu;
pub mod play;

pub use history::{clear_history, show_history};
pub use menu::{MenuChoice, parse_choice, run_menu};
pub use play::{PlayReport, play_and_record};
