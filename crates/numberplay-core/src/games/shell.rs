//! Shared game scaffolding.
//!
//! Every game variant carries the same stats/persistence plumbing. Rather
//! than a base-class hierarchy, variants implement the small [`GameVariant`]
//! trait and wrap a [`GameShell`], which owns the session tracker and talks
//! to the cache.

use crate::error::StorageError;
use crate::stats::{SessionStats, SessionTracker};
use crate::storage::{KvStore, TtlCache};

/// What a game controller must tell the shell about itself.
pub trait GameVariant {
    /// Stable key used to namespace persisted stats.
    fn key(&self) -> &'static str;

    /// Labels for the three stat boxes.
    fn stat_labels(&self) -> [&'static str; 3] {
        ["Attempts", "Correct", "Accuracy"]
    }
}

/// Rounding game identity.
pub struct RoundingVariant;

impl GameVariant for RoundingVariant {
    fn key(&self) -> &'static str {
        "rounding"
    }

    fn stat_labels(&self) -> [&'static str; 3] {
        ["Questions", "Correct", "Accuracy"]
    }
}

/// Number-line game identity.
pub struct NumberLineVariant;

impl GameVariant for NumberLineVariant {
    fn key(&self) -> &'static str {
        "numberlines"
    }

    fn stat_labels(&self) -> [&'static str; 3] {
        ["Guesses", "Correct", "Accuracy"]
    }
}

/// Arithmetic quiz identity.
pub struct QuizVariant;

impl GameVariant for QuizVariant {
    fn key(&self) -> &'static str {
        "quiz"
    }
}

/// Stats and persistence shared by every game, held by composition.
pub struct GameShell<'a, S: KvStore> {
    cache: &'a TtlCache<S>,
    tracker: SessionTracker,
    labels: [&'static str; 3],
}

impl<'a, S: KvStore> GameShell<'a, S> {
    /// Build a shell for a variant, restoring any persisted stats.
    pub fn new(cache: &'a TtlCache<S>, variant: &impl GameVariant) -> Self {
        Self {
            cache,
            tracker: SessionTracker::load(cache, variant.key()),
            labels: variant.stat_labels(),
        }
    }

    /// Record one answer outcome and persist the counters.
    ///
    /// # Errors
    /// Returns an error if the backend write fails.
    pub fn record_outcome(&mut self, is_correct: bool) -> Result<(), StorageError> {
        self.tracker.record(self.cache, is_correct)
    }

    /// Zero the counters and drop the persisted entry.
    ///
    /// # Errors
    /// Returns an error if the backend delete fails.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.tracker.reset(self.cache)
    }

    pub fn stats(&self) -> SessionStats {
        self.tracker.stats()
    }

    pub fn stat_labels(&self) -> [&'static str; 3] {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn shell_restores_variant_stats() {
        let cache = TtlCache::new(MemoryStore::new());
        {
            let mut shell = GameShell::new(&cache, &RoundingVariant);
            shell.record_outcome(true).unwrap();
            shell.record_outcome(false).unwrap();
        }

        let shell = GameShell::new(&cache, &RoundingVariant);
        assert_eq!(shell.stats().attempts, 2);
        assert_eq!(shell.stats().correct, 1);
    }

    #[test]
    fn variants_do_not_share_stats() {
        let cache = TtlCache::new(MemoryStore::new());
        let mut rounding = GameShell::new(&cache, &RoundingVariant);
        rounding.record_outcome(true).unwrap();

        let quiz = GameShell::new(&cache, &QuizVariant);
        assert_eq!(quiz.stats().attempts, 0);
    }

    #[test]
    fn labels_come_from_the_variant() {
        let cache = TtlCache::new(MemoryStore::new());
        let shell = GameShell::new(&cache, &NumberLineVariant);
        assert_eq!(shell.stat_labels()[0], "Guesses");
    }
}
