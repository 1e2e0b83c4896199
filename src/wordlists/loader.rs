//! Word list loading utilities
//!
//! Provides functions to load secret lists from files or use embedded constants.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_arcade::wordlists::loader::load_from_file;
///
/// let words = load_from_file("secrets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    debug!(
        "loaded {} words from {} ({skipped} skipped)",
        words.len(),
        path.display()
    );

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_arcade::wordlists::loader::words_from_slice;
/// use word_arcade::wordlists::SECRETS;
///
/// let words = words_from_slice(SECRETS);
/// assert_eq!(words.len(), SECRETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
