//! Per-game session statistics.
//!
//! Attempts and correct counts accumulate one outcome at a time and are
//! persisted through the TTL cache with no expiry, keyed per game. Loading
//! is forgiving: an absent or unreadable entry yields the zero default so a
//! fresh session always starts cleanly.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::{KvStore, TtlCache};

/// Attempt/correct counters for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempts: u64,
    pub correct: u64,
}

impl SessionStats {
    /// Whole-number accuracy percentage, 0 when nothing was attempted.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        ((self.correct as f64 / self.attempts as f64) * 100.0).round() as u32
    }
}

/// Accumulates outcomes for one game and persists them through the cache.
#[derive(Debug)]
pub struct SessionTracker {
    key: String,
    stats: SessionStats,
}

impl SessionTracker {
    /// A tracker starting from zero, persisting under `<game_key>-stats`.
    pub fn new(game_key: &str) -> Self {
        Self {
            key: format!("{game_key}-stats"),
            stats: SessionStats::default(),
        }
    }

    /// Restore a prior session. Absent or unreadable stats leave the
    /// tracker at its zero default.
    pub fn load<S: KvStore>(cache: &TtlCache<S>, game_key: &str) -> Self {
        let key = format!("{game_key}-stats");
        let stats = cache.get(&key).ok().flatten().unwrap_or_default();
        Self { key, stats }
    }

    /// Record one outcome and persist the updated counters (no TTL).
    ///
    /// # Errors
    /// Returns an error if the backend write fails; the in-memory counters
    /// are updated regardless.
    pub fn record<S: KvStore>(
        &mut self,
        cache: &TtlCache<S>,
        is_correct: bool,
    ) -> Result<(), StorageError> {
        self.stats.attempts += 1;
        if is_correct {
            self.stats.correct += 1;
        }
        cache.set(&self.key, &self.stats, None)
    }

    /// Zero the counters and remove the persisted entry.
    ///
    /// # Errors
    /// Returns an error if the backend delete fails.
    pub fn reset<S: KvStore>(&mut self, cache: &TtlCache<S>) -> Result<(), StorageError> {
        self.stats = SessionStats::default();
        cache.remove(&self.key)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn accuracy_is_zero_without_attempts() {
        assert_eq!(SessionStats::default().accuracy_percent(), 0);
    }

    #[test]
    fn accuracy_rounds_to_whole_percent() {
        let stats = SessionStats {
            attempts: 3,
            correct: 2,
        };
        assert_eq!(stats.accuracy_percent(), 67);
    }

    #[test]
    fn accuracy_stays_in_bounds() {
        for attempts in 0..20u64 {
            for correct in 0..=attempts {
                let stats = SessionStats { attempts, correct };
                assert!(stats.accuracy_percent() <= 100);
            }
        }
    }

    #[test]
    fn record_persists_and_reloads() {
        let cache = TtlCache::new(MemoryStore::new());
        let mut tracker = SessionTracker::new("rounding");
        tracker.record(&cache, true).unwrap();
        tracker.record(&cache, false).unwrap();
        tracker.record(&cache, true).unwrap();

        let restored = SessionTracker::load(&cache, "rounding");
        assert_eq!(
            restored.stats(),
            SessionStats {
                attempts: 3,
                correct: 2
            }
        );
    }

    #[test]
    fn load_defaults_when_absent() {
        let cache = TtlCache::new(MemoryStore::new());
        let tracker = SessionTracker::load(&cache, "numberlines");
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn load_defaults_when_record_is_corrupted() {
        let cache = TtlCache::new(MemoryStore::new());
        cache.store().kv_set("rounding-stats", "{broken").unwrap();
        let tracker = SessionTracker::load(&cache, "rounding");
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn reset_clears_backend_entry() {
        let cache = TtlCache::new(MemoryStore::new());
        let mut tracker = SessionTracker::new("quiz");
        tracker.record(&cache, true).unwrap();
        tracker.reset(&cache).unwrap();
        assert_eq!(tracker.stats(), SessionStats::default());
        assert!(cache.store().kv_get("quiz-stats").unwrap().is_none());
    }

    #[test]
    fn trackers_are_namespaced_per_game() {
        let cache = TtlCache::new(MemoryStore::new());
        let mut rounding = SessionTracker::new("rounding");
        rounding.record(&cache, true).unwrap();

        let numberlines = SessionTracker::load(&cache, "numberlines");
        assert_eq!(numberlines.stats(), SessionStats::default());
    }
}
