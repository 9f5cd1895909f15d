//! Testing utilities: a mock cursor store and catalog fixtures.
//!
//! The mock store records every write and can be told to fail the next
//! operation, which is how the degrade-to-empty failure posture of the
//! service facade gets exercised without real infrastructure.

mod mock_cursor_store;

pub use mock_cursor_store::MockCursorStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::Map;

    use crate::catalog::{CatalogIndex, CategoryEntry, VideoEntry};

    /// Number of Galaxy Patrol episodes in [`small_index`].
    pub const GALAXY_PATROL_EPISODES: usize = 3;

    /// A movie entry with no episodic or channel fields.
    pub fn movie(id: &str, name: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            name: name.to_string(),
            genres: Vec::new(),
            actors: Vec::new(),
            season_number: None,
            episode_number: None,
            channel_call_sign: None,
            extra: Map::new(),
        }
    }

    /// A movie with genres and actors filled in.
    pub fn movie_with(id: &str, name: &str, genres: &[&str], actors: &[&str]) -> VideoEntry {
        let mut entry = movie(id, name);
        entry.genres = genres.iter().map(|g| g.to_string()).collect();
        entry.actors = actors.iter().map(|a| a.to_string()).collect();
        entry
    }

    /// An episode of `series_id`. The entry id is the series id plus
    /// zero-padded season and episode digits, so trimming the trailing 4
    /// characters recovers the series id.
    pub fn episode(series_id: &str, season: u32, episode: u32) -> VideoEntry {
        let mut entry = movie(
            &format!("{series_id}{season:02}{episode:02}"),
            &format!("{series_id} S{season}E{episode}"),
        );
        entry.genres = vec!["Sci-Fi".to_string()];
        entry.season_number = Some(season.to_string());
        entry.episode_number = Some(episode.to_string());
        entry
    }

    /// A live-channel entry.
    pub fn channel(id: &str, name: &str, call_sign: &str) -> VideoEntry {
        let mut entry = movie(id, name);
        entry.channel_call_sign = Some(call_sign.to_string());
        entry
    }

    /// A category entry.
    pub fn category(id: &str, name: &str) -> CategoryEntry {
        CategoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            extra: Map::new(),
        }
    }

    /// A small mixed catalog: three movies, one three-episode series
    /// (tv001, seasons 1-2), one live channel, two categories.
    pub fn small_index() -> CatalogIndex {
        CatalogIndex::new(
            vec![
                movie_with("mv001", "Night Train", &["Thriller"], &["John Smith"]),
                movie_with(
                    "mv002",
                    "Midnight Laughs",
                    &["Comedy"],
                    &["Jane Doe", "John Smith"],
                ),
                movie_with("mv003", "Laugh Riot", &["Comedy"], &["Bob Roberts"]),
                episode("tv001", 1, 1),
                episode("tv001", 1, 2),
                episode("tv001", 2, 1),
                channel("ch001", "KXYZ News", "KXYZ"),
            ],
            vec![category("cat-comedy", "Comedy"), category("cat-thriller", "Thriller")],
        )
        .expect("fixture ids are unique")
    }

    /// A single-series catalog with one episode in each of the given
    /// seasons, episode numbers starting at 1 per season.
    pub fn series_index(series_id: &str, seasons: &[u32]) -> CatalogIndex {
        let videos = seasons.iter().map(|&s| episode(series_id, s, 1)).collect();
        CatalogIndex::new(videos, Vec::new()).expect("fixture ids are unique")
    }
}
