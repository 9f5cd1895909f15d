//! The catalog query facade: what directive handlers call.
//!
//! Orchestrates the query engine and episode navigator (pure, in-memory)
//! with the cursor store (the only asynchronous dependency). Lookup misses
//! are `None`/empty, never errors; store failures degrade to empty results
//! and surface only through logs and metrics (see [`PageLookup`]).

use std::sync::Arc;

use tracing::warn;

use crate::catalog::{CatalogIndex, CategoryEntry, VideoEntry};
use crate::cursor::{CursorRecord, CursorStore, PAGE_CURSOR_TTL, PROGRESS_TTL};
use crate::cursor::{ProgressRecord, ProgressStore};
use crate::episodes::EpisodeNavigator;
use crate::metrics::{
    CURSOR_STORE_ERRORS_TOTAL, PAGES_CREATED_TOTAL, PAGE_LOOKUPS_TOTAL, SEARCHES_TOTAL,
};
use crate::query::{QueryEngine, SearchCriteria};

/// One page of a result list, with the token for the rest if it overflowed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Page {
    /// The first `limit` items.
    pub items: Vec<String>,
    /// Token for the persisted remainder; `None` when everything fit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Outcome of a next-page lookup.
///
/// Callers that only want the items can use
/// [`CatalogService::resolve_page`], which collapses the last two variants
/// to an empty list. The distinction exists so a future revision can react
/// to store trouble without changing today's observable behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    /// The persisted remainder, in original order.
    Found(Vec<String>),
    /// Unknown or expired token.
    NotFound,
    /// The store could not be reached; indistinguishable from `NotFound`
    /// for the caller's purposes.
    StoreUnavailable,
}

/// Facade over the query engine, episode navigator, and cursor store.
pub struct CatalogService {
    index: Arc<CatalogIndex>,
    engine: QueryEngine,
    navigator: EpisodeNavigator,
    cursors: Arc<dyn CursorStore>,
    progress: Option<Arc<dyn ProgressStore>>,
}

impl CatalogService {
    pub fn new(index: Arc<CatalogIndex>, cursors: Arc<dyn CursorStore>) -> Self {
        Self {
            engine: QueryEngine::new(Arc::clone(&index)),
            navigator: EpisodeNavigator::new(Arc::clone(&index)),
            index,
            cursors,
            progress: None,
        }
    }

    /// Attach a playback-progress store.
    pub fn with_progress_store(mut self, progress: Arc<dyn ProgressStore>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Combined AND-search; see [`QueryEngine::find_matches`].
    pub fn resolve_matches(&self, criteria: &SearchCriteria) -> Vec<String> {
        let matches = self.engine.find_matches(criteria);
        let outcome = if matches.is_empty() { "empty" } else { "hit" };
        SEARCHES_TOTAL.with_label_values(&[outcome]).inc();
        matches
    }

    /// Entries whose genres contain the named category's name.
    pub fn matches_for_category(&self, category_id: &str) -> Vec<String> {
        self.engine.by_category(category_id)
    }

    /// Full entry for an id, or `None` on a miss.
    pub fn metadata(&self, id: &str) -> Option<VideoEntry> {
        self.index.video(id).cloned()
    }

    /// Full entries for several ids; misses are silently omitted.
    pub fn metadata_batch(&self, ids: &[String]) -> Vec<VideoEntry> {
        ids.iter().filter_map(|id| self.metadata(id)).collect()
    }

    /// Category entries for several ids; misses are silently omitted.
    pub fn categories(&self, ids: &[String]) -> Vec<CategoryEntry> {
        ids.iter()
            .filter_map(|id| self.index.category(id).cloned())
            .collect()
    }

    /// Every category id, in feed order.
    pub fn all_category_ids(&self) -> Vec<String> {
        self.index.category_ids()
    }

    /// The episode before season/episode in `video_id`'s series, or `None`
    /// at the start of the series.
    pub fn previous_episode(
        &self,
        video_id: &str,
        season: i64,
        episode: Option<i64>,
    ) -> Option<VideoEntry> {
        self.navigator.previous_episode(video_id, season, episode)
    }

    /// The episode after season/episode in `video_id`'s series, or `None`
    /// at the end of the series.
    pub fn next_episode(
        &self,
        video_id: &str,
        season: i64,
        episode: Option<i64>,
    ) -> Option<VideoEntry> {
        self.navigator.next_episode(video_id, season, episode)
    }

    /// Seasons available in `video_id`'s series (string-sorted; see
    /// [`EpisodeNavigator::available_seasons`]).
    pub fn available_seasons(&self, video_id: &str) -> Vec<i64> {
        self.navigator.available_seasons(video_id)
    }

    /// Split `items` into a first page of at most `limit` items, persisting
    /// the remainder under a fresh token.
    ///
    /// A failed overflow write is logged and counted but never surfaced:
    /// the page is still returned, and the token will later resolve to
    /// nothing. `scope` names the calling operation for diagnostics only.
    pub async fn paginate(&self, items: Vec<String>, limit: usize, scope: &str) -> Page {
        if items.len() <= limit {
            return Page {
                items,
                next_token: None,
            };
        }

        let mut items = items;
        let tail = items.split_off(limit);
        let record = CursorRecord::new(tail, PAGE_CURSOR_TTL, scope);
        let token = record.token.clone();

        PAGES_CREATED_TOTAL.with_label_values(&[scope]).inc();
        if let Err(e) = self.cursors.put(&record).await {
            CURSOR_STORE_ERRORS_TOTAL.with_label_values(&["put"]).inc();
            warn!(error = %e, token, scope, "failed to persist pagination overflow");
        }

        Page {
            items,
            next_token: Some(token),
        }
    }

    /// Fetch the remainder behind a token, distinguishing a miss from a
    /// store failure.
    pub async fn lookup_page(&self, token: &str) -> PageLookup {
        match self.cursors.get(token).await {
            Ok(Some(record)) => {
                PAGE_LOOKUPS_TOTAL.with_label_values(&["found"]).inc();
                PageLookup::Found(record.items)
            }
            Ok(None) => {
                PAGE_LOOKUPS_TOTAL.with_label_values(&["not_found"]).inc();
                PageLookup::NotFound
            }
            Err(e) => {
                CURSOR_STORE_ERRORS_TOTAL.with_label_values(&["get"]).inc();
                PAGE_LOOKUPS_TOTAL
                    .with_label_values(&["store_unavailable"])
                    .inc();
                warn!(error = %e, token, "cursor lookup failed");
                PageLookup::StoreUnavailable
            }
        }
    }

    /// Like [`Self::lookup_page`], collapsed to the caller-facing contract:
    /// absent, malformed, and unreachable all come back as no items.
    pub async fn resolve_page(&self, token: &str) -> Vec<String> {
        match self.lookup_page(token).await {
            PageLookup::Found(items) => items,
            PageLookup::NotFound | PageLookup::StoreUnavailable => Vec::new(),
        }
    }

    /// Stored playback position for a user/video pair, if any.
    pub async fn playback_position(&self, user_id: &str, video_id: &str) -> Option<i64> {
        let progress = self.progress.as_ref()?;
        match progress.get(user_id, video_id).await {
            Ok(record) => record.map(|r| r.position_seconds),
            Err(e) => {
                warn!(error = %e, user_id, video_id, "progress lookup failed");
                None
            }
        }
    }

    /// Persist a playback position. Failures are logged, not surfaced.
    pub async fn record_playback_position(
        &self,
        user_id: &str,
        video_id: &str,
        position_seconds: i64,
    ) {
        let Some(progress) = self.progress.as_ref() else {
            return;
        };
        let record = ProgressRecord::new(user_id, video_id, position_seconds, PROGRESS_TTL);
        if let Err(e) = progress.put(&record).await {
            warn!(error = %e, user_id, video_id, "failed to persist playback position");
        }
    }
}
