//! Play history tracking
//!
//! Per-game statistics and the durable store that holds them.

mod stats;
mod store;

pub use stats::GameStats;
pub use store::{HISTORY_FORMAT, HISTORY_VERSION, HistoryStore, StoreError};
