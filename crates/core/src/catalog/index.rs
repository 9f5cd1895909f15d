//! The read-only catalog snapshot.

use std::collections::HashMap;

use super::{CatalogError, CategoryEntry, VideoEntry};

/// Immutable snapshot of the catalog: videos and categories in feed order.
///
/// Constructed once (see [`super::load_index`]) and shared behind an `Arc`;
/// there is no mutation API, so concurrent readers need no coordination.
#[derive(Debug)]
pub struct CatalogIndex {
    videos: Vec<VideoEntry>,
    categories: Vec<CategoryEntry>,
    // id -> position in `videos`, for exact lookups
    video_positions: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Build an index from feed-ordered entries.
    ///
    /// Fails if two videos share an id; query results are id lists, so a
    /// duplicate would make them ambiguous.
    pub fn new(
        videos: Vec<VideoEntry>,
        categories: Vec<CategoryEntry>,
    ) -> Result<Self, CatalogError> {
        let mut video_positions = HashMap::with_capacity(videos.len());
        for (position, video) in videos.iter().enumerate() {
            if video_positions.insert(video.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }
        Ok(Self {
            videos,
            categories,
            video_positions,
        })
    }

    /// All videos, in feed order.
    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    /// All categories, in feed order.
    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Exact-id video lookup.
    pub fn video(&self, id: &str) -> Option<&VideoEntry> {
        self.video_positions.get(id).map(|&pos| &self.videos[pos])
    }

    /// Exact-id category lookup.
    pub fn category(&self, id: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Ids of every category, in feed order.
    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Number of videos in the snapshot.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the snapshot holds no videos.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
