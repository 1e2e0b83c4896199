//! Formatting utilities for terminal output

use crate::history::GameStats;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the attempt budget has been used
#[must_use]
pub fn attempts_bar(guesses_made: u32, max_attempts: u32) -> String {
    create_progress_bar(
        f64::from(guesses_made),
        f64::from(max_attempts),
        max_attempts as usize,
    )
}

/// Last-played time for display, "Never" if the game was never played
#[must_use]
pub fn format_last_played(stats: &GameStats) -> String {
    stats.last_played_at().map_or_else(
        || "Never".to_string(),
        |at| at.format("%b %d, %Y – %-I:%M %p").to_string(),
    )
}

/// One history line for a game
///
/// `"<game> - Played: N[, Avg Score: X.XX, Last Score: Y], Last Played: <when>"`
#[must_use]
pub fn format_history_line(game: &str, stats: &GameStats) -> String {
    let mut line = format!("{game} - Played: {}", stats.times_played());

    if !stats.scores().is_empty() {
        line.push_str(&format!(
            ", Avg Score: {:.2}, Last Score: {}",
            stats.average_score(),
            stats.last_score()
        ));
    }

    line.push_str(&format!(", Last Played: {}", format_last_played(stats)));
    line
}
