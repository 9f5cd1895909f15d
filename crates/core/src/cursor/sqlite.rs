//! SQLite-backed cursor and progress stores.
//!
//! Stands in for the durable key-value table behind the same contract:
//! `get`/`put`/`batch_get` with TTL expiry. Item lists are stored as one
//! comma-joined string. Expiry is lazy: expired rows are treated as absent
//! on read and deleted opportunistically.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use super::{CursorRecord, CursorStore, CursorStoreError, ProgressRecord, ProgressStore};

/// SQLite-backed [`CursorStore`].
pub struct SqliteCursorStore {
    conn: Mutex<Connection>,
}

impl SqliteCursorStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn new(path: &Path) -> Result<Self, CursorStoreError> {
        let conn = Connection::open(path).map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, CursorStoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CursorStoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cursors (
                token TEXT PRIMARY KEY,
                expires_at INTEGER NOT NULL,
                items TEXT,
                scope TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_cursors_expires_at ON cursors(expires_at);
            "#,
        )
        .map_err(|e| CursorStoreError::Database(e.to_string()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned lock means a panicked writer; the data itself is fine.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn row_to_record(token: &str, expires_at: i64, items: Option<String>, scope: String) -> CursorRecord {
        let items = match items {
            Some(joined) => split_items(&joined),
            None => {
                // Malformed row; degrade to an empty tail rather than fail.
                warn!(token, "cursor record has no items field, treating as empty");
                Vec::new()
            }
        };
        CursorRecord {
            token: token.to_string(),
            expires_at,
            items,
            scope,
        }
    }

    fn get_sync(&self, token: &str) -> Result<Option<CursorRecord>, CursorStoreError> {
        let now = Utc::now().timestamp();
        let conn = self.lock();
        let row = conn
            .query_row(
                "SELECT expires_at, items, scope FROM cursors WHERE token = ?1",
                params![token],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| CursorStoreError::Database(e.to_string()))?;

        let Some((expires_at, items, scope)) = row else {
            return Ok(None);
        };
        if expires_at <= now {
            let _ = conn.execute("DELETE FROM cursors WHERE token = ?1", params![token]);
            return Ok(None);
        }
        Ok(Some(Self::row_to_record(token, expires_at, items, scope)))
    }
}

#[async_trait]
impl CursorStore for SqliteCursorStore {
    async fn get(&self, token: &str) -> Result<Option<CursorRecord>, CursorStoreError> {
        self.get_sync(token)
    }

    async fn put(&self, record: &CursorRecord) -> Result<(), CursorStoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT OR REPLACE INTO cursors (token, expires_at, items, scope)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.token,
                record.expires_at,
                record.items.join(","),
                record.scope
            ],
        )
        .map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Ok(())
    }

    async fn batch_get(
        &self,
        tokens: &[String],
    ) -> Result<HashMap<String, CursorRecord>, CursorStoreError> {
        let mut found = HashMap::new();
        for token in tokens {
            if let Some(record) = self.get_sync(token)? {
                found.insert(token.clone(), record);
            }
        }
        Ok(found)
    }

    async fn remove(&self, token: &str) -> Result<(), CursorStoreError> {
        let conn = self.lock();
        conn.execute("DELETE FROM cursors WHERE token = ?1", params![token])
            .map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Ok(())
    }
}

/// SQLite-backed [`ProgressStore`].
pub struct SqliteProgressStore {
    conn: Mutex<Connection>,
}

impl SqliteProgressStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn new(path: &Path) -> Result<Self, CursorStoreError> {
        let conn = Connection::open(path).map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, CursorStoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CursorStoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS progress (
                user_id TEXT NOT NULL,
                video_id TEXT NOT NULL,
                position_seconds INTEGER NOT NULL,
                expires_at INTEGER NOT NULL,
                PRIMARY KEY (user_id, video_id)
            );
            "#,
        )
        .map_err(|e| CursorStoreError::Database(e.to_string()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ProgressStore for SqliteProgressStore {
    async fn get(
        &self,
        user_id: &str,
        video_id: &str,
    ) -> Result<Option<ProgressRecord>, CursorStoreError> {
        let now = Utc::now().timestamp();
        let conn = self.lock();
        let row = conn
            .query_row(
                "SELECT position_seconds, expires_at FROM progress
                 WHERE user_id = ?1 AND video_id = ?2",
                params![user_id, video_id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()
            .map_err(|e| CursorStoreError::Database(e.to_string()))?;

        let Some((position_seconds, expires_at)) = row else {
            return Ok(None);
        };
        if expires_at <= now {
            let _ = conn.execute(
                "DELETE FROM progress WHERE user_id = ?1 AND video_id = ?2",
                params![user_id, video_id],
            );
            return Ok(None);
        }
        Ok(Some(ProgressRecord {
            user_id: user_id.to_string(),
            video_id: video_id.to_string(),
            position_seconds,
            expires_at,
        }))
    }

    async fn put(&self, record: &ProgressRecord) -> Result<(), CursorStoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT OR REPLACE INTO progress (user_id, video_id, position_seconds, expires_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.user_id,
                record.video_id,
                record.position_seconds,
                record.expires_at
            ],
        )
        .map_err(|e| CursorStoreError::Database(e.to_string()))?;
        Ok(())
    }
}

/// Split a comma-joined item string; an empty string holds no items.
fn split_items(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(',').map(str::to_string).collect()
}
