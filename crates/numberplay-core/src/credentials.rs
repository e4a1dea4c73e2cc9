//! Short-lived generator credential.
//!
//! The content-generation API key is held through the cache for 24 hours,
//! after which the next read treats it as absent and the user is asked
//! again. `clear` is called when the service reports the key unauthorized.

use crate::error::StorageError;
use crate::storage::{KvStore, TtlCache};

const API_KEY_CACHE_KEY: &str = "openai_api_key";

/// How long a stored key stays usable.
pub const API_KEY_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Store the key with the standard 24-hour TTL.
///
/// # Errors
/// Returns an error if the backend write fails.
pub fn store<S: KvStore>(cache: &TtlCache<S>, api_key: &str) -> Result<(), StorageError> {
    cache.set(API_KEY_CACHE_KEY, &api_key, Some(API_KEY_TTL_MS))
}

/// The stored key, if present and unexpired.
pub fn load<S: KvStore>(cache: &TtlCache<S>) -> Option<String> {
    cache.get(API_KEY_CACHE_KEY).ok().flatten()
}

/// Drop the stored key.
///
/// # Errors
/// Returns an error if the backend delete fails.
pub fn clear<S: KvStore>(cache: &TtlCache<S>) -> Result<(), StorageError> {
    cache.remove(API_KEY_CACHE_KEY)
}
