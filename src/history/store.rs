//! Durable play history
//!
//! The store is a map from game name to `GameStats`, saved as one JSON
//! document tagged with a format name and version:
//!
//! ```json
//! { "format": "word-arcade-history", "version": 1, "games": { "Word Guess": { ... } } }
//! ```
//!
//! Saving overwrites the whole file. Loading is best effort: anything that
//! cannot be read back as this exact format and version yields an empty store.

use super::GameStats;
use chrono::Utc;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Format tag written into every history file
pub const HISTORY_FORMAT: &str = "word-arcade-history";

/// Current history file version
pub const HISTORY_VERSION: u32 = 1;

/// Errors reading or writing the history file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read history file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write history file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("history file {} is not valid", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode history")]
    Encode(#[source] serde_json::Error),
    #[error("history file {} has unsupported format {format:?} version {version}", .path.display())]
    Incompatible {
        path: PathBuf,
        format: String,
        version: u32,
    },
    #[error("history for {game:?} records {scores} scores but only {times_played} plays")]
    Inconsistent {
        game: String,
        times_played: u32,
        scores: usize,
    },
}

impl StoreError {
    /// True when the file simply does not exist yet
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Deserialize)]
struct FileHeader {
    format: String,
    version: u32,
}

#[derive(Serialize)]
struct HistoryFileRef<'a> {
    format: &'a str,
    version: u32,
    games: &'a FxHashMap<String, GameStats>,
}

#[derive(Deserialize)]
struct HistoryFile {
    games: FxHashMap<String, GameStats>,
}

/// Play history for every game, keyed by game name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    games: FxHashMap<String, GameStats>,
}

impl HistoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a play of `game` now
    pub fn record_play(&mut self, game: &str, score: Option<u32>) {
        self.record_play_at(game, score, Utc::now().timestamp_millis());
    }

    /// Record a play of `game` at `now_ms` (epoch milliseconds)
    ///
    /// Always counts the play and refreshes the last-played time; appends the
    /// score only when there is one.
    pub fn record_play_at(&mut self, game: &str, score: Option<u32>, now_ms: i64) {
        let mut stats = self.games.remove(game).unwrap_or_default();
        stats.record(score, now_ms);
        debug!(
            "recorded play of {game:?} (score {score:?}, {} plays)",
            stats.times_played()
        );
        self.games.insert(game.to_string(), stats);
    }

    #[must_use]
    pub fn get(&self, game: &str) -> Option<&GameStats> {
        self.games.get(game)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameStats)> {
        self.games.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Entries sorted by game name
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &GameStats)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Write the whole store to `path`, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let file = HistoryFileRef {
            format: HISTORY_FORMAT,
            version: HISTORY_VERSION,
            games: &self.games,
        };
        let contents = serde_json::to_string_pretty(&file).map_err(StoreError::Encode)?;

        fs::write(path, contents).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("saved {} game(s) to {}", self.games.len(), path.display());
        Ok(())
    }

    /// Read a store from `path`
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the file is missing or unreadable, is not
    /// valid JSON, carries another format or version, or breaks the
    /// plays-versus-scores invariant.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let header: FileHeader = serde_json::from_str(&contents).map_err(parse_error)?;
        if header.format != HISTORY_FORMAT || header.version != HISTORY_VERSION {
            return Err(StoreError::Incompatible {
                path: path.to_path_buf(),
                format: header.format,
                version: header.version,
            });
        }

        let file: HistoryFile = serde_json::from_str(&contents).map_err(parse_error)?;
        if let Some((game, stats)) = file.games.iter().find(|(_, s)| !s.is_consistent()) {
            return Err(StoreError::Inconsistent {
                game: game.clone(),
                times_played: stats.times_played(),
                scores: stats.scores().len(),
            });
        }

        debug!("loaded {} game(s) from {}", file.games.len(), path.display());
        Ok(Self { games: file.games })
    }

    /// Read a store from `path`, starting fresh on any failure
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(store) => store,
            Err(err) if err.is_not_found() => {
                info!("no previous history found, starting fresh");
                Self::new()
            }
            Err(err) => {
                info!("could not load history, starting fresh: {err}");
                Self::new()
            }
        }
    }

    /// Forget every entry and persist the empty store to `path`
    ///
    /// The in-memory store stays empty even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the empty store cannot be written.
    pub fn clear(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.games.clear();
        self.save(path).inspect_err(|err| warn!("clearing history: {err}"))
    }
}
