//! Saved-module persistence.
//!
//! All saved modules live as a single collection under one cache key with
//! no expiry. Saving upserts by id; reads of an absent or unreadable
//! collection come back empty.

use super::LearningModule;
use crate::error::StorageError;
use crate::storage::{KvStore, TtlCache};

/// Cache key holding the saved-module collection.
pub const MODULE_COLLECTION_KEY: &str = "ai_learning_modules";

/// Cache key holding the module currently being played.
pub const ACTIVE_MODULE_KEY: &str = "activeModule";

/// CRUD over saved learning modules, layered on the TTL cache.
pub struct ModuleStore<'a, S: KvStore> {
    cache: &'a TtlCache<S>,
}

impl<'a, S: KvStore> ModuleStore<'a, S> {
    pub fn new(cache: &'a TtlCache<S>) -> Self {
        Self { cache }
    }

    /// All saved modules. Absent or unreadable collections read as empty.
    pub fn all(&self) -> Vec<LearningModule> {
        self.cache
            .get(MODULE_COLLECTION_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Look up a module by id.
    pub fn find(&self, id: &str) -> Option<LearningModule> {
        self.all().into_iter().find(|m| m.id == id)
    }

    /// Insert the module, replacing any existing one with the same id.
    ///
    /// # Errors
    /// Returns an error if the backend write fails.
    pub fn save(&self, module: &LearningModule) -> Result<(), StorageError> {
        let mut modules = self.all();
        match modules.iter_mut().find(|m| m.id == module.id) {
            Some(existing) => *existing = module.clone(),
            None => modules.push(module.clone()),
        }
        self.cache.set(MODULE_COLLECTION_KEY, &modules, None)
    }

    /// Delete a module by id. Returns whether anything was removed.
    ///
    /// # Errors
    /// Returns an error if the backend write fails.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut modules = self.all();
        let before = modules.len();
        modules.retain(|m| m.id != id);
        if modules.len() == before {
            return Ok(false);
        }
        self.cache.set(MODULE_COLLECTION_KEY, &modules, None)?;
        Ok(true)
    }

    /// Mark a module as the one currently being played.
    ///
    /// # Errors
    /// Returns an error if the backend write fails.
    pub fn set_active(&self, module: &LearningModule) -> Result<(), StorageError> {
        self.cache.set(ACTIVE_MODULE_KEY, module, None)
    }

    /// The module currently being played, if any.
    pub fn active(&self) -> Option<LearningModule> {
        self.cache.get(ACTIVE_MODULE_KEY).ok().flatten()
    }
}
