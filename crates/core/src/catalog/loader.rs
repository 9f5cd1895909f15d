//! Catalog feed loading.

use std::path::Path;

use serde::Deserialize;

use super::{CatalogError, CatalogIndex, CategoryEntry, VideoEntry};

/// On-disk shape of the catalog feed.
#[derive(Debug, Deserialize)]
struct CatalogFeed {
    #[serde(default)]
    videos: Vec<VideoEntry>,
    #[serde(default)]
    categories: Vec<CategoryEntry>,
}

/// Load a catalog index from a JSON feed file.
pub fn load_index(path: &Path) -> Result<CatalogIndex, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FeedNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    load_index_from_str(&raw)
}

/// Load a catalog index from a JSON string (useful for testing).
pub fn load_index_from_str(raw: &str) -> Result<CatalogIndex, CatalogError> {
    let feed: CatalogFeed =
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
    CatalogIndex::new(feed.videos, feed.categories)
}
