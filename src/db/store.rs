//! Durable key/value store for the JSON snapshots.
//!
//! The engine never touches storage directly: the driver calls `save` at
//! the end of every mutation and `load` once at startup.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Storage keys.
pub mod keys {
    pub const TIMER_STATE: &str = "timer-state";
    pub const LOG_ENTRIES: &str = "log-entries";
    pub const SESSION_HISTORY: &str = "session-history";
    pub const SESSION_CLOCK: &str = "session-clock";
    pub const DISPLAY_NAME: &str = "display-name";
}

pub trait StateStore {
    /// Overwrite the raw value stored at `key`.
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Raw value stored at `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn delete(&mut self, key: &str) -> AppResult<()>;

    /// Record a notable operation in the audit trail. Backends without one
    /// ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value).map_err(|e| AppError::persistence(key, e))?;
        self.put(key, &json)
    }

    /// Deserialize the value at `key`.
    ///
    /// Missing and unparsable content both yield `None`; the caller falls
    /// back to its defaults.
    fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warning(format!("Ignoring unreadable '{}' snapshot: {}", key, e));
                Ok(None)
            }
        }
    }
}

/// SQLite-backed store (`state_store` table).
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl StateStore for SqliteStore {
    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool
            .conn
            .execute(
                "INSERT INTO state_store (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| AppError::persistence(key, e))?;
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM state_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM state_store WHERE key = ?1", [key])
            .map_err(|e| AppError::persistence(key, e))?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

/// Volatile store used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every write fails with a persistence error.
    pub fail_writes: bool,
    /// Operations passed to `audit`, in order.
    pub audit_trail: Vec<String>,
    /// Number of successful writes.
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl StateStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::persistence(key, "storage unavailable"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::persistence(key, "storage unavailable"));
        }
        self.entries.remove(key);
        Ok(())
    }

    fn audit(&mut self, operation: &str, _target: &str, _message: &str) {
        self.audit_trail.push(operation.to_string());
    }
}
