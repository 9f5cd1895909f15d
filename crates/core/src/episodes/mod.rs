//! Episode-sequence navigation for series content.
//!
//! A series is identified by the common id prefix its episodes share: the
//! entry id with the trailing 4 characters (season + episode digits)
//! removed. Navigation walks episode numbers within a season and crosses
//! season boundaries when a season is exhausted.

use std::sync::Arc;

use crate::catalog::{CatalogIndex, VideoEntry};

/// Computes season sets and previous/next episodes over the catalog
/// snapshot. Pure and synchronous, like [`crate::query::QueryEngine`].
#[derive(Debug, Clone)]
pub struct EpisodeNavigator {
    index: Arc<CatalogIndex>,
}

impl EpisodeNavigator {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// The series id for an episode id: everything before the trailing 4
    /// characters. Shorter ids collapse to the empty prefix.
    pub fn series_id(video_id: &str) -> &str {
        let cut = video_id
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &video_id[..cut]
    }

    /// The distinct seasons of `video_id`'s series.
    ///
    /// Seasons are parsed to integers (unparseable ones are skipped) and
    /// sorted by their decimal-string form, not numerically: season 10
    /// sorts before season 2. Directive handlers replay this ordering back
    /// to the user, so it stays as is; the regression tests pin it down.
    pub fn available_seasons(&self, video_id: &str) -> Vec<i64> {
        let mut seasons: Vec<i64> = self
            .series_episodes(video_id)
            .filter_map(|e| e.season_number.as_deref()?.parse().ok())
            .collect();
        seasons.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        seasons.dedup();
        seasons
    }

    /// The episode immediately before `reference` in `season`, or the last
    /// episode of the season when `reference` is `None`.
    ///
    /// When the season has no earlier episode, navigation restarts in the
    /// *lowest* earlier season (first element of the season list filtered
    /// to earlier seasons), not the nearest one. `None` means the start of
    /// the series.
    pub fn previous_episode(
        &self,
        video_id: &str,
        season: i64,
        reference: Option<i64>,
    ) -> Option<VideoEntry> {
        let mut candidates = self.season_candidates(video_id, season, |episode| {
            reference.is_none_or(|r| episode < r)
        });
        candidates.sort_by(|a, b| b.0.cmp(&a.0));
        if let Some((_, entry)) = candidates.into_iter().next() {
            return Some(entry);
        }

        let earlier: Vec<i64> = self
            .available_seasons(video_id)
            .into_iter()
            .filter(|&s| s < season)
            .collect();
        let &target = earlier.first()?;
        self.previous_episode(video_id, target, None)
    }

    /// The episode immediately after `reference` in `season`, or the first
    /// episode of the season when `reference` is `None`.
    ///
    /// When the season has no later episode, navigation continues with the
    /// first element of the season list filtered to later seasons. `None`
    /// means the end of the series.
    pub fn next_episode(
        &self,
        video_id: &str,
        season: i64,
        reference: Option<i64>,
    ) -> Option<VideoEntry> {
        let mut candidates = self.season_candidates(video_id, season, |episode| {
            reference.is_none_or(|r| episode > r)
        });
        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some((_, entry)) = candidates.into_iter().next() {
            return Some(entry);
        }

        let later: Vec<i64> = self
            .available_seasons(video_id)
            .into_iter()
            .filter(|&s| s > season)
            .collect();
        let &target = later.first()?;
        self.next_episode(video_id, target, None)
    }

    fn series_episodes<'a>(&'a self, video_id: &str) -> impl Iterator<Item = &'a VideoEntry> {
        let prefix = Self::series_id(video_id).to_lowercase();
        self.index
            .videos()
            .iter()
            .filter(move |v| v.id.to_lowercase().starts_with(&prefix))
    }

    /// Episodes of `season` whose parsed episode number passes `keep`,
    /// paired with that number. Entries without parseable numbers drop out.
    fn season_candidates<F>(&self, video_id: &str, season: i64, keep: F) -> Vec<(i64, VideoEntry)>
    where
        F: Fn(i64) -> bool,
    {
        self.series_episodes(video_id)
            .filter(|e| {
                e.season_number
                    .as_deref()
                    .and_then(|s| s.parse::<i64>().ok())
                    == Some(season)
            })
            .filter_map(|e| {
                let episode: i64 = e.episode_number.as_deref()?.parse().ok()?;
                keep(episode).then(|| (episode, e.clone()))
            })
            .collect()
    }
}
