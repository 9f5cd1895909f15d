//! Types for the video catalog feed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One playable unit in the catalog: a movie, a live channel, or a series
/// episode.
///
/// Episodes of the same series share an id prefix; the series id is the
/// entry id with its trailing 4 characters removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    /// Unique entry id.
    pub id: String,
    /// Display title.
    pub name: String,
    /// Genres (e.g., "Comedy", "Documentary").
    #[serde(default)]
    pub genres: Vec<String>,
    /// Credited actors.
    #[serde(default)]
    pub actors: Vec<String>,
    /// Season number, present only for episodic entries. Kept as the feed's
    /// string form; callers normalize before comparing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_number: Option<String>,
    /// Episode number, present only for episodic entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<String>,
    /// Call sign, present only for live-channel entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_call_sign: Option<String>,
    /// Everything else in the feed record, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoEntry {
    /// Whether this entry belongs to a series (has a season number).
    pub fn is_episodic(&self) -> bool {
        self.season_number.is_some()
    }
}

/// A browsable category. Its `name` is matched against entry genres,
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    /// Unique category id.
    pub id: String,
    /// Category name (genre label).
    pub name: String,
    /// Opaque display metadata, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog feed not found: {0}")]
    FeedNotFound(String),

    #[error("Failed to read catalog feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog feed: {0}")]
    Parse(String),

    #[error("Duplicate video id in catalog feed: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_entry_deserializes_camel_case() {
        let json = r#"{
            "id": "tv0010001",
            "name": "Galaxy Patrol",
            "genres": ["Sci-Fi"],
            "actors": ["Jane Doe"],
            "seasonNumber": "1",
            "episodeNumber": "3",
            "webPlayerContentType": "video"
        }"#;

        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "tv0010001");
        assert_eq!(entry.season_number.as_deref(), Some("1"));
        assert_eq!(entry.episode_number.as_deref(), Some("3"));
        assert!(entry.is_episodic());
        // Unknown fields land in the opaque passthrough.
        assert_eq!(
            entry.extra.get("webPlayerContentType").and_then(|v| v.as_str()),
            Some("video")
        );
    }

    #[test]
    fn test_video_entry_optional_fields_default() {
        let json = r#"{"id": "mv001", "name": "Some Movie"}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert!(entry.genres.is_empty());
        assert!(entry.actors.is_empty());
        assert!(entry.season_number.is_none());
        assert!(entry.channel_call_sign.is_none());
        assert!(!entry.is_episodic());
    }

    #[test]
    fn test_video_entry_round_trips_extra_metadata() {
        let json = r#"{"id": "mv001", "name": "Some Movie", "thumbnailUrl": "https://x/y.png"}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&entry).unwrap();
        assert!(out.contains("thumbnailUrl"));
        // None fields are skipped on the way out.
        assert!(!out.contains("seasonNumber"));
    }

    #[test]
    fn test_category_entry_deserialization() {
        let json = r#"{"id": "cat-comedy", "name": "Comedy", "artUrl": "https://x/c.png"}"#;
        let category: CategoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "cat-comedy");
        assert_eq!(category.name, "Comedy");
        assert!(category.extra.contains_key("artUrl"));
    }
}
