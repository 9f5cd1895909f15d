//! Durable cursor storage for paginated results, plus the sibling
//! playback-progress store that shares the same get/put/TTL contract.
//!
//! Overflowing result tails are persisted under an opaque token and read
//! back at most once per "next page" request. Records expire; an expired
//! record is indistinguishable from an absent one.

mod sqlite;
mod types;

pub use sqlite::{SqliteCursorStore, SqliteProgressStore};
pub use types::*;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

/// How long a pagination cursor stays readable.
pub const PAGE_CURSOR_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// How long a playback-progress record stays readable.
pub const PROGRESS_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// Durable key-value storage for pagination cursors.
///
/// Keys are bare tokens. Implementations must treat expired records as
/// absent; callers never see them.
#[async_trait]
pub trait CursorStore: Send + Sync {
    /// Fetch a record by token. `Ok(None)` covers both "never stored" and
    /// "expired".
    async fn get(&self, token: &str) -> Result<Option<CursorRecord>, CursorStoreError>;

    /// Persist a record under its token, replacing any previous value.
    async fn put(&self, record: &CursorRecord) -> Result<(), CursorStoreError>;

    /// Fetch several records at once. Missing tokens are simply absent
    /// from the returned map.
    async fn batch_get(
        &self,
        tokens: &[String],
    ) -> Result<HashMap<String, CursorRecord>, CursorStoreError>;

    /// Delete a record. Deleting an absent token is not an error.
    async fn remove(&self, token: &str) -> Result<(), CursorStoreError>;
}

/// Durable storage for per-user playback positions, keyed by
/// `(user_id, video_id)`.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch the stored position, if any unexpired record exists.
    async fn get(
        &self,
        user_id: &str,
        video_id: &str,
    ) -> Result<Option<ProgressRecord>, CursorStoreError>;

    /// Persist a position, replacing any previous value for the same key.
    async fn put(&self, record: &ProgressRecord) -> Result<(), CursorStoreError>;
}
