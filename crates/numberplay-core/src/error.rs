//! Core error types for numberplay-core.
//!
//! Nothing here is fatal to a running game: storage problems surface to the
//! CLI layer, and everything user-facing (bad input, empty difficulty
//! selection, corrupted cache records) is handled locally without an error.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for numberplay-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Learning-module parsing/validation errors
    #[error("Module error: {0}")]
    Module(#[from] ModuleError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// A value could not be encoded into a cache record
    #[error("Failed to encode cache record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while turning a generator response into a learning module.
///
/// A module that fails any of these checks is rejected whole; no partial
/// module is ever accepted.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// The response text did not contain parseable JSON
    #[error("Could not parse the generator response as JSON: {0}")]
    ParseFailed(String),

    /// A required top-level field is missing or empty
    #[error("Module is missing required field '{0}'")]
    MissingField(&'static str),

    /// The problems array is missing or empty
    #[error("Module must contain at least one problem")]
    NoProblems,

    /// A problem entry lacks a question or answer
    #[error("Problem {index} must have a non-empty question and answer")]
    InvalidProblem { index: usize },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
