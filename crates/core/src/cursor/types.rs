//! Types for the cursor and progress stores.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The persisted tail of a paginated result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorRecord {
    /// Opaque token the client hands back for the next page. Callers must
    /// not parse it.
    pub token: String,
    /// Expiry as epoch seconds; the record is invisible at or after this
    /// instant.
    pub expires_at: i64,
    /// Remaining item ids, in original result order.
    pub items: Vec<String>,
    /// Which facade operation created the cursor. Diagnostic only; lookup
    /// is by token alone.
    pub scope: String,
}

impl CursorRecord {
    /// Build a record with a fresh random token, expiring `ttl` from now.
    pub fn new(items: Vec<String>, ttl: std::time::Duration, scope: impl Into<String>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now().timestamp() + ttl.as_secs() as i64,
            items,
            scope: scope.into(),
        }
    }

    /// Whether the record has passed its expiry.
    pub fn is_expired(&self, now_epoch: i64) -> bool {
        self.expires_at <= now_epoch
    }
}

/// A per-user playback position for one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub user_id: String,
    pub video_id: String,
    /// Playback offset in seconds.
    pub position_seconds: i64,
    /// Expiry as epoch seconds.
    pub expires_at: i64,
}

impl ProgressRecord {
    /// Build a record expiring `ttl` from now.
    pub fn new(
        user_id: impl Into<String>,
        video_id: impl Into<String>,
        position_seconds: i64,
        ttl: std::time::Duration,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            video_id: video_id.into(),
            position_seconds,
            expires_at: Utc::now().timestamp() + ttl.as_secs() as i64,
        }
    }
}

/// Errors for cursor and progress store operations.
///
/// Malformed stored data is not an error at this boundary; stores degrade
/// it to an empty record and log instead.
#[derive(Debug, Error)]
pub enum CursorStoreError {
    #[error("Database error: {0}")]
    Database(String),
}
