//! History commands

use super::play::report_save_failure;
use crate::history::HistoryStore;
use crate::output::write_history;
use std::io::{self, Write};
use std::path::Path;

/// Print the play history summary
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn show_history(store: &HistoryStore, output: &mut dyn Write) -> io::Result<()> {
    write_history(output, store)
}

/// Clear the play history and persist the empty store
///
/// Returns whether the empty store was written. A write failure is reported
/// on `output`; the in-memory store is cleared either way.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn clear_history(
    store: &mut HistoryStore,
    history_path: &Path,
    output: &mut dyn Write,
) -> io::Result<bool> {
    match store.clear(history_path) {
        Ok(()) => {
            writeln!(output, "Game history cleared.")?;
            Ok(true)
        }
        Err(err) => {
            report_save_failure(output, &err)?;
            Ok(false)
        }
    }
}
