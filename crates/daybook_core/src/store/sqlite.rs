//! SQLite-backed blob store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases for durable blob storage.
//! - Keep SQL details inside this persistence boundary.
//!
//! # Invariants
//! - Returned stores have the `blobs` table ready.
//! - Port operations never propagate failures (see [`super::BlobStore`]).

use super::{BlobStore, StoreResult};
use log::{error, info};
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// SQLite-backed [`BlobStore`] using a single `blobs` key-value table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a database file and prepares the blob table.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=store status=start mode=file");
        match Connection::open(path).map_err(Into::into).and_then(Self::bootstrap) {
            Ok(store) => {
                info!(
                    "event=db_open module=store status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=db_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory database and prepares the blob table.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=store status=start mode=memory");
        match Connection::open_in_memory()
            .map_err(Into::into)
            .and_then(Self::bootstrap)
        {
            Ok(store) => {
                info!(
                    "event=db_open module=store status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=db_open module=store status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blobs (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }
}

impl BlobStore for SqliteStore {
    fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=blob_get module=store status=error backend=sqlite key={key} error={err}");
                return fallback;
            }
        };

        let Some(raw) = raw else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                error!("event=blob_get module=store status=error backend=sqlite key={key} error={err}");
                fallback
            }
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!("event=blob_set module=store status=error backend=sqlite key={key} error={err}");
                return;
            }
        };

        if let Err(err) = self.conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [key, raw.as_str()],
        ) {
            error!("event=blob_set module=store status=error backend=sqlite key={key} error={err}");
        }
    }
}
