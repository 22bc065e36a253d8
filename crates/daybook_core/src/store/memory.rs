//! In-memory blob store.
//!
//! # Responsibility
//! - Back the persistence port with a plain map of JSON strings.
//! - Serve as the test backend and the degraded fallback when no durable
//!   backend is available.

use super::BlobStore;
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed [`BlobStore`]; single-threaded by design.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw blob, bypassing encoding. Test hook for corrupt data.
    pub fn seed_raw(&self, key: &str, raw: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}

impl BlobStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let blobs = self.blobs.borrow();
        let Some(raw) = blobs.get(key) else {
            return fallback;
        };
        match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                error!("event=blob_get module=store status=error backend=memory key={key} error={err}");
                fallback
            }
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                self.blobs.borrow_mut().insert(key.to_string(), raw);
            }
            Err(err) => {
                error!("event=blob_set module=store status=error backend=memory key={key} error={err}");
            }
        }
    }
}
