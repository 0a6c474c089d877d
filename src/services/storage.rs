use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::anyhow;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::queries;

/// Client-side style key/value persistence (favorites, dismissed banners,
/// notification history). Bookings never go through here.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

pub struct SqliteStorage {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    fn conn(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|_| anyhow!("database lock poisoned"))
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let conn = self.conn()?;
        queries::kv_get(&conn, key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let conn = self.conn()?;
        queries::kv_set(&conn, key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let conn = self.conn()?;
        queries::kv_delete(&conn, key).map(|_| ())
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Reads a JSON value, falling back to `T::default()` when the key is missing,
/// unreadable or corrupt.
pub fn load_json<T: DeserializeOwned + Default>(storage: &dyn Storage, key: &str) -> T {
    match storage.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "discarding corrupt stored value");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::error!(key, error = %e, "storage read failed, using default");
            T::default()
        }
    }
}

/// Writes a JSON value. Failures are logged; the caller keeps its in-memory value.
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to serialize value for storage");
            return false;
        }
    };
    match storage.set(key, &raw) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(key, error = %e, "storage write failed");
            false
        }
    }
}

/// Serializes every read-modify-write through `update_json`.
static UPDATE_LOCK: Mutex<()> = Mutex::new(());

/// Loads, changes and saves a JSON value as one step with respect to other
/// `update_json` callers, so concurrent updates of the same key are not lost.
/// A failed write is logged and the changed value is still handed to `f`'s caller.
pub fn update_json<T, R>(storage: &dyn Storage, key: &str, f: impl FnOnce(&mut T) -> R) -> R
where
    T: Serialize + DeserializeOwned + Default,
{
    let _guard = UPDATE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let mut value: T = load_json(storage, key);
    let out = f(&mut value);
    save_json(storage, key, &value);
    out
}
