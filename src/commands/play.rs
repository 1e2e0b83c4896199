//! Play command
//!
//! Runs one game, records the result and saves the history.

use crate::games::{Game, GameError};
use crate::history::{HistoryStore, StoreError};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What happened in one recorded play
#[derive(Debug)]
pub struct PlayReport {
    pub game: String,
    pub score: Option<u32>,
    /// Set when the history could not be saved; the in-memory store still has the play
    pub save_error: Option<StoreError>,
}

impl PlayReport {
    #[must_use]
    pub const fn saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Play `game` once, record the result in `store` and save it to `history_path`
///
/// A save failure is reported on `output` and in the returned report; it does
/// not fail the call.
///
/// # Errors
///
/// Returns `GameError` if the game could not finish (nothing is recorded), or
/// an I/O error from writing to `output`.
pub fn play_and_record(
    game: &mut dyn Game,
    store: &mut HistoryStore,
    history_path: &Path,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<PlayReport, GameError> {
    let score = game.play(input, output)?;
    let name = game.name().to_string();

    store.record_play(&name, score);
    let save_error = store.save(history_path).err();
    if let Some(err) = &save_error {
        warn!("{err}");
        report_save_failure(output, err)?;
    }

    Ok(PlayReport {
        game: name,
        score,
        save_error,
    })
}

/// Tell the user a history write failed
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn report_save_failure(output: &mut dyn Write, err: &StoreError) -> io::Result<()> {
    writeln!(
        output,
        "{} {err}",
        "Game history save failed:".red().bold()
    )
}
