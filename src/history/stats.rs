//! Per-game play statistics

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Play statistics for one game
///
/// `times_played` counts every recorded play, scored or not, so it is never
/// less than `scores.len()`. `last_played` is epoch milliseconds; 0 means never.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    times_played: u32,
    scores: Vec<u32>,
    last_played: i64,
}

impl GameStats {
    /// Record one play at `now_ms`
    pub fn record(&mut self, score: Option<u32>, now_ms: i64) {
        self.times_played = self.times_played.saturating_add(1);
        if let Some(score) = score {
            self.scores.push(score);
        }
        self.last_played = now_ms;
    }

    #[inline]
    #[must_use]
    pub const fn times_played(&self) -> u32 {
        self.times_played
    }

    /// Recorded scores, oldest first
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Epoch milliseconds of the last recorded play, 0 if never
    #[inline]
    #[must_use]
    pub const fn last_played(&self) -> i64 {
        self.last_played
    }

    /// Last-played time in the local zone, `None` if never played
    #[must_use]
    pub fn last_played_at(&self) -> Option<DateTime<Local>> {
        if self.last_played == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.last_played).map(|utc| utc.with_timezone(&Local))
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.scores.iter().map(|&s| u64::from(s)).sum()
    }

    /// Mean score, 0.0 when nothing has been scored
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.total_score() as f64 / self.scores.len() as f64
    }

    /// Most recent score, 0 when nothing has been scored
    #[must_use]
    pub fn last_score(&self) -> u32 {
        self.scores.last().copied().unwrap_or(0)
    }

    /// Holds when every score has a matching play
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.times_played as usize >= self.scores.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_never_played() {
        let stats = GameStats::default();
        assert_eq!(stats.times_played(), 0);
        assert!(stats.scores().is_empty());
        assert_eq!(stats.last_played(), 0);
        assert!(stats.last_played_at().is_none());
    }

    #[test]
    fn record_with_and_without_score() {
        let mut stats = GameStats::default();
        stats.record(Some(7), 1_000);
        stats.record(None, 2_000);

        assert_eq!(stats.times_played(), 2);
        assert_eq!(stats.scores(), &[7]);
        assert_eq!(stats.last_played(), 2_000);
        assert!(stats.is_consistent());
    }

    #[test]
    fn derived_views() {
        let mut stats = GameStats::default();
        assert_eq!(stats.average_score(), 0.0);
        assert_eq!(stats.last_score(), 0);

        for (i, score) in [10, 4, 7].into_iter().enumerate() {
            stats.record(Some(score), i as i64 + 1);
        }
        assert_eq!(stats.total_score(), 21);
        assert!((stats.average_score() - 7.0).abs() < f64::EPSILON);
        assert_eq!(stats.last_score(), 7);
    }

    #[test]
    fn play_count_saturates_at_max() {
        let mut stats: GameStats = serde_json::from_str(
            r#"{"times_played":4294967295,"scores":[3],"last_played":5}"#,
        )
        .unwrap();
        stats.record(Some(4), 6);

        assert_eq!(stats.times_played(), u32::MAX);
        assert_eq!(stats.scores(), &[3, 4]);
        assert_eq!(stats.last_played(), 6);
        assert!(stats.is_consistent());
    }

    #[test]
    fn inconsistent_counts_detected() {
        let stats: GameStats =
            serde_json::from_str(r#"{"times_played":1,"scores":[3,4],"last_played":5}"#).unwrap();
        assert!(!stats.is_consistent());
    }

    #[test]
    fn last_played_at_converts_millis() {
        let mut stats = GameStats::default();
        stats.record(None, 1_700_000_000_000);
        let at = stats.last_played_at().unwrap();
        assert_eq!(at.timestamp_millis(), 1_700_000_000_000);
    }
}
