//! Expiring key/value cache layered over a [`KvStore`] backend.
//!
//! Each entry is persisted as a JSON record:
//!
//! ```text
//! {"value": <JSON value>, "expiry": <epoch-millis integer> | null}
//! ```
//!
//! Expiry is lazy: entries are only evicted when a read finds them past
//! their deadline. There is no background sweep. A record that fails to
//! parse is treated as a cache miss, never an error -- a corrupted record
//! must not crash a reader.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::KvStore;
use crate::error::StorageError;

#[derive(Debug, Serialize, Deserialize)]
struct CacheRecord {
    value: serde_json::Value,
    expiry: Option<i64>,
}

/// TTL cache over a key/value backend.
///
/// A single instance is constructed by the application and passed by
/// reference to every consumer; `KvStore` is implemented for `&S`, so the
/// cache can borrow a shared [`Database`](super::Database).
pub struct TtlCache<S: KvStore> {
    store: S,
}

impl<S: KvStore> TtlCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `value`, tagged with an absolute expiry of `now + ttl_ms` when
    /// a TTL is given, else no expiry. Unconditionally overwrites any
    /// existing entry for `key`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be encoded or the backend write
    /// fails.
    pub fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_ms: Option<i64>,
    ) -> Result<(), StorageError> {
        self.set_at(key, value, ttl_ms, now_ms())
    }

    /// [`set`](Self::set) with an explicit clock, for deterministic tests.
    pub fn set_at<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_ms: Option<i64>,
        now_ms: i64,
    ) -> Result<(), StorageError> {
        let record = CacheRecord {
            value: serde_json::to_value(value)?,
            expiry: ttl_ms.map(|ttl| now_ms + ttl),
        };
        let raw = serde_json::to_string(&record)?;
        self.store.kv_set(key, &raw)
    }

    /// Read the value for `key` if present and unexpired.
    ///
    /// An expired entry is deleted from the backend and reported as absent.
    /// A malformed record, or one whose value does not deserialize into `T`,
    /// is reported as absent without touching the backend.
    ///
    /// # Errors
    /// Returns an error only when the backend itself fails.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get_at(key, now_ms())
    }

    /// [`get`](Self::get) with an explicit clock, for deterministic tests.
    pub fn get_at<T: DeserializeOwned>(
        &self,
        key: &str,
        now_ms: i64,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.kv_get(key)? else {
            return Ok(None);
        };
        let record: CacheRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            // Fail-open: callers only ever see "present" or "absent".
            Err(_) => return Ok(None),
        };
        if let Some(expiry) = record.expiry {
            if now_ms > expiry {
                self.store.kv_remove(key)?;
                return Ok(None);
            }
        }
        Ok(serde_json::from_value(record.value).ok())
    }

    /// Delete the entry for `key`. No error if absent.
    ///
    /// # Errors
    /// Returns an error if the backend delete fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.kv_remove(key)
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
