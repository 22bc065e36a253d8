//! Key-value blob persistence port and its backends.
//!
//! # Responsibility
//! - Define the persistence contract the repositories write through to.
//! - Keep (de)serialization at this boundary, out of the business logic.
//!
//! # Invariants
//! - `get` never fails: missing or corrupt data degrades to the caller's
//!   fallback value.
//! - `set` never propagates: a failed write is logged and swallowed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error opening or bootstrapping a store backend.
///
/// Only backend construction surfaces errors; the port operations themselves
/// degrade instead (see module invariants).
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistence port: named JSON-serializable blobs.
pub trait BlobStore {
    /// Reads and decodes the blob stored under `key`.
    ///
    /// Returns `fallback` when the key is absent or the stored data cannot
    /// be decoded.
    fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T;

    /// Encodes `value` and writes it under `key`.
    ///
    /// A failed write is logged and swallowed; callers keep their in-memory
    /// state as the source of truth.
    fn set<T: Serialize>(&self, key: &str, value: &T);
}
