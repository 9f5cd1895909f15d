//! Mock cursor store for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::cursor::{CursorRecord, CursorStore, CursorStoreError};

/// In-memory [`CursorStore`] with controllable behavior:
/// - records every `put` for assertions,
/// - can be told to fail the next operation,
/// - honors record expiry like a real store.
#[derive(Default)]
pub struct MockCursorStore {
    records: Arc<RwLock<HashMap<String, CursorRecord>>>,
    puts: Arc<RwLock<Vec<CursorRecord>>>,
    next_error: Arc<RwLock<Option<String>>>,
}

impl MockCursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store operation fail with a database error carrying
    /// this message.
    pub async fn fail_next(&self, message: impl Into<String>) {
        *self.next_error.write().await = Some(message.into());
    }

    /// Every record ever written, in write order.
    pub async fn recorded_puts(&self) -> Vec<CursorRecord> {
        self.puts.read().await.clone()
    }

    /// Number of writes so far.
    pub async fn put_count(&self) -> usize {
        self.puts.read().await.len()
    }

    async fn take_failure(&self) -> Result<(), CursorStoreError> {
        if let Some(message) = self.next_error.write().await.take() {
            return Err(CursorStoreError::Database(message));
        }
        Ok(())
    }
}

#[async_trait]
impl CursorStore for MockCursorStore {
    async fn get(&self, token: &str) -> Result<Option<CursorRecord>, CursorStoreError> {
        self.take_failure().await?;
        let now = Utc::now().timestamp();
        Ok(self
            .records
            .read()
            .await
            .get(token)
            .filter(|r| !r.is_expired(now))
            .cloned())
    }

    async fn put(&self, record: &CursorRecord) -> Result<(), CursorStoreError> {
        self.take_failure().await?;
        self.puts.write().await.push(record.clone());
        self.records
            .write()
            .await
            .insert(record.token.clone(), record.clone());
        Ok(())
    }

    async fn batch_get(
        &self,
        tokens: &[String],
    ) -> Result<HashMap<String, CursorRecord>, CursorStoreError> {
        self.take_failure().await?;
        let now = Utc::now().timestamp();
        let records = self.records.read().await;
        Ok(tokens
            .iter()
            .filter_map(|t| {
                records
                    .get(t)
                    .filter(|r| !r.is_expired(now))
                    .map(|r| (t.clone(), r.clone()))
            })
            .collect())
    }

    async fn remove(&self, token: &str) -> Result<(), CursorStoreError> {
        self.take_failure().await?;
        self.records.write().await.remove(token);
        Ok(())
    }
}
