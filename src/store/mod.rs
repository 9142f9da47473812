//! # Settings Store
//!
//! Persistent key-value storage for per-user settings. The widget keeps one
//! JSON record here (the reminder preference); the store itself is generic so
//! features stay testable against an in-memory backend.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with SQLite and in-memory backends

use anyhow::{anyhow, Result};
use log::debug;
use sqlite::{Connection, State};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// String key-value storage boundary.
///
/// Values are opaque strings; callers decide the encoding (the reminder
/// feature stores JSON). All operations are idempotent: overwriting an
/// existing key and deleting a missing key both succeed.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. No-op when the key is absent.
    fn delete(&self, key: &str) -> Result<()>;
}

// ============================================================================
// SQLite backend
// ============================================================================

/// SQLite-backed settings store.
///
/// Keeps a single `settings` table with one row per key. The connection sits
/// behind a mutex so the store can be shared as `Arc<dyn KeyValueStore>`.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the settings database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = sqlite::open(path.as_ref())?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )?;
        debug!("Opened settings database at {}", path.as_ref().display());
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("settings store lock poisoned"))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let mut statement = conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        statement.bind((1, key))?;
        match statement.next()? {
            State::Row => Ok(Some(statement.read::<String, _>(0)?)),
            State::Done => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        let mut statement =
            conn.prepare("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")?;
        statement.bind((1, key))?;
        statement.bind((2, value))?;
        while let State::Row = statement.next()? {}
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        let mut statement = conn.prepare("DELETE FROM settings WHERE key = ?")?;
        statement.bind((1, key))?;
        while let State::Row = statement.next()? {}
        Ok(())
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// In-memory settings store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("settings store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("settings store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("settings store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
