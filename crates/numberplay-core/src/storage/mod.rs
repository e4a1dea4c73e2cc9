mod config;
pub mod cache;
pub mod database;

pub use cache::TtlCache;
pub use config::Config;
pub use database::Database;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// Key/value backend the TTL cache is layered over.
///
/// The SQLite [`Database`] is the production implementation; [`MemoryStore`]
/// is a drop-in double for tests. All operations hit the backend
/// synchronously, with no buffering.
pub trait KvStore {
    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn kv_remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).kv_get(key)
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).kv_set(key, value)
    }

    fn kv_remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).kv_remove(key)
    }
}

/// In-memory key/value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn kv_remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Returns `~/.config/numberplay[-dev]/` based on NUMBERPLAY_ENV.
///
/// Set NUMBERPLAY_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("NUMBERPLAY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("numberplay-dev")
    } else {
        base_dir.join("numberplay")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
