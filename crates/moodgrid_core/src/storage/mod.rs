//! Persistent key-value adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed document store consumed by the emotion store.
//! - Provide SQLite-backed and in-memory adapters.
//! - Serialize writes through one ordered queue.
//!
//! # Invariants
//! - Values are opaque UTF-8 documents; adapters never inspect them.
//! - Same-key writes land in issue order (last write wins).

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;
mod write_queue;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
pub use write_queue::PersistQueue;

pub type StorageResult<T> = Result<T, StorageError>;

/// Adapter-level failure.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    LockPoisoned(&'static str),
    /// Backend-specific I/O failure reported by non-SQLite adapters.
    Io(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::LockPoisoned(what) => write!(f, "{what} lock poisoned"),
            Self::Io(message) => write!(f, "storage i/o failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::LockPoisoned(_) | Self::Io(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed document storage.
///
/// Implementations must be shareable with the background writer thread.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored document, or `None` when the key was never written.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous document.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Key names for the persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub matrix: String,
    pub records: String,
    pub language: String,
}

impl StorageKeys {
    /// Keys used by the browser build of the app.
    pub fn web() -> Self {
        Self {
            matrix: "emotion-matrix-data".to_string(),
            records: "emotion-records".to_string(),
            language: "language".to_string(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            matrix: "emotionMatrix".to_string(),
            records: "emotionRecords".to_string(),
            language: "language".to_string(),
        }
    }
}
