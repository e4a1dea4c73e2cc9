//! # Numberplay Core Library
//!
//! Core logic for the Numberplay arithmetic practice games. The CLI binary
//! is a thin interactive layer over this crate; everything with actual
//! behavior lives here.
//!
//! ## Key Components
//!
//! - [`games`]: Procedural problem engines (rounding, number-line
//!   estimation, arithmetic quiz) plus the shared [`games::GameShell`]
//! - [`TtlCache`]: Expiring key/value cache over a SQLite-backed store
//! - [`SessionTracker`]: Per-game attempt/correct statistics
//! - [`module`]: AI-generated learning-module parsing and persistence
//!
//! The cache is constructed once by the application and passed by
//! reference to every consumer; the [`storage::KvStore`] trait allows an
//! in-memory double in tests.

pub mod credentials;
pub mod error;
pub mod games;
pub mod module;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, ModuleError, StorageError};
pub use games::{GameShell, GameVariant};
pub use module::{LearningModule, ModuleProblem, ModuleStore};
pub use stats::{SessionStats, SessionTracker};
pub use storage::{Config, Database, TtlCache};
