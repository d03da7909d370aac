//! SQLite-backed implementation of `KVStore`
//!
//! This implementation stores entries in a SQLite database file, providing
//! persistence across program runs. Every write is committed before the
//! returned future resolves.
//!
//! Statements run on tokio's blocking pool, so the methods must be awaited
//! inside a tokio runtime.

use super::types::{KVError, KVStore};
use crate::config::StorageConfig;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

impl From<rusqlite::Error> for KVError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

/// SQLite-backed key-value storage
///
/// A single connection is shared behind a mutex. The lock is only taken
/// on the blocking pool and never held across an `.await`.
pub struct SqliteKV {
    /// Path to the SQLite database file
    db_path: String,
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKV {
    /// Open (or create) the database at the given path
    ///
    /// Creates the table if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if database cannot be opened or table creation fails.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, KVError> {
        let db_path = db_path.as_ref().to_string_lossy().to_string();

        let conn = Connection::open(&db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        debug!(path = %db_path, "opened sqlite store");

        Ok(Self {
            db_path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the store file of a sandbox, creating its directory if needed
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or the database
    /// cannot be opened.
    pub fn open_config(config: &StorageConfig) -> Result<Self, KVError> {
        std::fs::create_dir_all(config.dir()).map_err(|e| {
            KVError::Backend(format!("cannot create {}: {e}", config.dir().display()))
        })?;
        Self::new(config.db_path())
    }

    /// Path of the underlying database file
    #[must_use]
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> Result<T, KVError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let result = tokio::task::spawn_blocking(move || f(&conn.lock()))
            .await
            .map_err(|e| KVError::Backend(format!("sqlite task failed: {e}")))?;
        Ok(result?)
    }
}

impl KVStore for SqliteKV {
    async fn read(&self, key: &str) -> Result<Option<String>, KVError> {
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })
        .await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), KVError> {
        let (key, value) = (key.to_string(), value.to_string());
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO kv_entries (key, value) VALUES (?, ?)",
                params![key, value],
            )
        })
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KVError> {
        let key = key.to_string();
        self.with_conn(move |conn| conn.execute("DELETE FROM kv_entries WHERE key = ?", params![key]))
            .await?;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), KVError> {
        self.with_conn(|conn| conn.execute("DELETE FROM kv_entries", []))
            .await?;
        Ok(())
    }
}
