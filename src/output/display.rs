//! Display functions for games, menus and history

use super::formatters::{attempts_bar, format_history_line};
use crate::core::{CommonLetters, WORD_LENGTH, Word, WordError};
use crate::history::HistoryStore;
use colored::Colorize;
use std::io::{self, Write};

/// Rules shown before a word guess session
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_word_guess_intro(out: &mut dyn Write, max_attempts: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "WORD GUESS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "You have {max_attempts} attempts to guess a secret {WORD_LENGTH} letter word."
    )?;
    writeln!(
        out,
        "After each wrong guess you'll see the letters it shares with the secret."
    )?;
    writeln!(
        out,
        "Your score is the number of attempts remaining after a correct guess.\n"
    )
}

/// Rejection notice for malformed input
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_invalid_guess(out: &mut dyn Write, err: &WordError) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Please enter exactly {WORD_LENGTH} letters A-Z only (no punctuation).").red()
    )?;
    writeln!(out, "  {}", err.to_string().bright_black())
}

/// Feedback for a wrong guess with attempts left
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_miss(
    out: &mut dyn Write,
    common: &CommonLetters,
    guesses_made: u32,
    max_attempts: u32,
) -> io::Result<()> {
    writeln!(
        out,
        "Incorrect guess. Letters in common: {}",
        common.to_string().yellow().bold()
    )?;
    writeln!(
        out,
        "Guesses made: {guesses_made}/{max_attempts} {}",
        attempts_bar(guesses_made, max_attempts).bright_black()
    )
}

/// Victory banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_win_banner(out: &mut dyn Write, score: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉  W I N N E R !  🎉        ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Score: {} {}\n",
        score.to_string().bright_yellow().bold(),
        if score == 1 {
            "attempt left"
        } else {
            "attempts left"
        }
    )
}

/// Defeat banner, revealing the secret
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_lose_banner(
    out: &mut dyn Write,
    common: &CommonLetters,
    secret: &Word,
) -> io::Result<()> {
    writeln!(
        out,
        "Incorrect guess. Letters in common: {}",
        common.to_string().yellow().bold()
    )?;
    writeln!(out, "\n{}", "═".repeat(60).red())?;
    writeln!(
        out,
        "You're out of guesses. You lose. The word was {}.",
        secret.text().bright_yellow().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(60).red())
}

/// Play history summary, one line per game sorted by name
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_history(out: &mut dyn Write, store: &HistoryStore) -> io::Result<()> {
    writeln!(out, "\n{}", "=== Game Play History ===".bright_cyan().bold())?;

    if store.is_empty() {
        return writeln!(out, "No games played yet.");
    }

    for (game, stats) in store.sorted() {
        writeln!(out, "{}", format_history_line(game, stats))?;
    }
    Ok(())
}
