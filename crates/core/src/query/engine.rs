//! Single-criterion lookups and the combined intersection search.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::CatalogIndex;

use super::SearchCriteria;

/// Pure, synchronous lookups over the shared catalog snapshot.
///
/// Every operation returns entry ids in feed order (the insertion order of
/// the underlying index), never sorted.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: Arc<CatalogIndex>,
}

impl QueryEngine {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// Entries whose id starts with `id`, case-insensitively.
    ///
    /// Prefix, not exact: "tv001" matches every episode of series tv001.
    pub fn by_video_id(&self, id: &str) -> Vec<String> {
        let needle = id.to_lowercase();
        self.collect_ids(|v| v.id.to_lowercase().starts_with(&needle))
    }

    /// Entries whose name starts with `name`, case-insensitively.
    pub fn by_video_name(&self, name: &str) -> Vec<String> {
        let needle = name.to_lowercase();
        self.collect_ids(|v| v.name.to_lowercase().starts_with(&needle))
    }

    /// Entries listing `genre` among their genres, case-insensitively.
    pub fn by_genre(&self, genre: &str) -> Vec<String> {
        self.collect_ids(|v| v.genres.iter().any(|g| g.eq_ignore_ascii_case(genre)))
    }

    /// Entries listing `actor` among their actors, case-insensitively.
    pub fn by_actor(&self, actor: &str) -> Vec<String> {
        self.collect_ids(|v| v.actors.iter().any(|a| a.eq_ignore_ascii_case(actor)))
    }

    /// Live-channel entries with the given call sign, case-insensitively.
    pub fn by_channel_call_sign(&self, call_sign: &str) -> Vec<String> {
        self.collect_ids(|v| {
            v.channel_call_sign
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(call_sign))
        })
    }

    /// Entries whose genres contain the named category's `name`.
    ///
    /// An unknown category id resolves to no entries.
    pub fn by_category(&self, category_id: &str) -> Vec<String> {
        match self.index.category(category_id) {
            Some(category) => self.by_genre(&category.name),
            None => Vec::new(),
        }
    }

    /// Episodes of `video_id`'s prefix scope in the given season.
    ///
    /// Season is compared by string equality; the caller normalizes.
    pub fn by_season(&self, video_id: &str, season: &str) -> Vec<String> {
        let needle = video_id.to_lowercase();
        self.collect_ids(|v| {
            v.id.to_lowercase().starts_with(&needle)
                && v.season_number.as_deref() == Some(season)
        })
    }

    /// Like [`Self::by_season`] with the episode constrained too.
    pub fn by_season_and_episode(&self, video_id: &str, season: &str, episode: &str) -> Vec<String> {
        let needle = video_id.to_lowercase();
        self.collect_ids(|v| {
            v.id.to_lowercase().starts_with(&needle)
                && v.season_number.as_deref() == Some(season)
                && v.episode_number.as_deref() == Some(episode)
        })
    }

    /// Combined AND-search.
    ///
    /// Each applicable criterion contributes one id list:
    /// - id/name prefix lookups run only when no season scope is given;
    /// - with both video id and season present, a season (or season+episode)
    ///   lookup runs instead;
    /// - genre, actor, and call sign always run when present.
    ///
    /// Lists that matched nothing are dropped before intersecting, so a
    /// criterion that found no entries does not constrain the result.
    /// Directive handlers depend on that asymmetry; see the regression
    /// tests before changing it.
    ///
    /// The result keeps the order of the first surviving list.
    pub fn find_matches(&self, criteria: &SearchCriteria) -> Vec<String> {
        let mut lists: Vec<Vec<String>> = Vec::new();

        if criteria.season_number.is_none() {
            if let Some(id) = &criteria.video_id {
                lists.push(self.by_video_id(id));
            }
            if let Some(name) = &criteria.video_name {
                lists.push(self.by_video_name(name));
            }
        } else if let Some(id) = &criteria.video_id {
            let season = criteria.season_number.as_deref().unwrap_or_default();
            match &criteria.episode_number {
                Some(episode) => lists.push(self.by_season_and_episode(id, season, episode)),
                None => lists.push(self.by_season(id, season)),
            }
        }

        if let Some(genre) = &criteria.genre_name {
            lists.push(self.by_genre(genre));
        }
        if let Some(actor) = &criteria.actor_name {
            lists.push(self.by_actor(actor));
        }
        if let Some(call_sign) = &criteria.channel_call_sign {
            lists.push(self.by_channel_call_sign(call_sign));
        }

        intersect_non_empty(lists)
    }

    fn collect_ids<F>(&self, predicate: F) -> Vec<String>
    where
        F: Fn(&crate::catalog::VideoEntry) -> bool,
    {
        self.index
            .videos()
            .iter()
            .filter(|v| predicate(v))
            .map(|v| v.id.clone())
            .collect()
    }
}

/// Intersect id lists after discarding empty ones, keeping the order of the
/// first surviving list.
fn intersect_non_empty(lists: Vec<Vec<String>>) -> Vec<String> {
    let mut surviving = lists.into_iter().filter(|l| !l.is_empty());
    let Some(mut result) = surviving.next() else {
        return Vec::new();
    };
    for list in surviving {
        let keep: HashSet<&str> = list.iter().map(String::as_str).collect();
        result.retain(|id| keep.contains(id.as_str()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn engine() -> QueryEngine {
        QueryEngine::new(Arc::new(fixtures::small_index()))
    }

    #[test]
    fn test_by_video_id_is_prefix_match() {
        let engine = engine();
        let ids = engine.by_video_id("tv001");
        assert_eq!(ids.len(), fixtures::GALAXY_PATROL_EPISODES);
        assert!(ids.iter().all(|id| id.starts_with("tv001")));
    }

    #[test]
    fn test_by_video_id_is_case_insensitive() {
        let engine = engine();
        assert_eq!(engine.by_video_id("TV001"), engine.by_video_id("tv001"));
    }

    #[test]
    fn test_by_video_name_prefix() {
        let engine = engine();
        let ids = engine.by_video_name("night");
        assert_eq!(ids, vec!["mv001".to_string()]);
    }

    #[test]
    fn test_by_genre_exact_not_prefix() {
        let engine = engine();
        // "Com" must not match "Comedy".
        assert!(engine.by_genre("Com").is_empty());
        assert!(!engine.by_genre("Comedy").is_empty());
    }

    #[test]
    fn test_by_genre_case_insensitive() {
        let engine = engine();
        assert_eq!(engine.by_genre("comedy"), engine.by_genre("Comedy"));
    }

    #[test]
    fn test_by_actor() {
        let engine = engine();
        let ids = engine.by_actor("jane doe");
        assert!(ids.contains(&"mv002".to_string()));
    }

    #[test]
    fn test_by_channel_call_sign() {
        let engine = engine();
        assert_eq!(engine.by_channel_call_sign("kxyz"), vec!["ch001".to_string()]);
        assert!(engine.by_channel_call_sign("wabc").is_empty());
    }

    #[test]
    fn test_by_category_resolves_name_to_genres() {
        let engine = engine();
        let via_category = engine.by_category("cat-comedy");
        assert_eq!(via_category, engine.by_genre("Comedy"));
    }

    #[test]
    fn test_by_category_unknown_id_is_empty() {
        let engine = engine();
        assert!(engine.by_category("cat-nope").is_empty());
    }

    #[test]
    fn test_by_season_and_episode() {
        let engine = engine();
        let ids = engine.by_season_and_episode("tv001", "1", "2");
        assert_eq!(ids, vec!["tv0010102".to_string()]);
    }

    #[test]
    fn test_by_season() {
        let engine = engine();
        let ids = engine.by_season("tv001", "1");
        assert_eq!(ids, vec!["tv0010101".to_string(), "tv0010102".to_string()]);
    }

    #[test]
    fn test_find_matches_empty_criteria_is_empty() {
        let engine = engine();
        assert!(engine.find_matches(&SearchCriteria::default()).is_empty());
    }

    #[test]
    fn test_find_matches_single_criterion_equals_direct_call() {
        let engine = engine();
        let criteria = SearchCriteria::new().with_genre_name("Comedy");
        assert_eq!(engine.find_matches(&criteria), engine.by_genre("Comedy"));
    }

    #[test]
    fn test_find_matches_intersects_overlapping_criteria() {
        let engine = engine();
        // mv002 is the only Comedy entry with Jane Doe.
        let criteria = SearchCriteria::new()
            .with_genre_name("Comedy")
            .with_actor_name("Jane Doe");
        assert_eq!(engine.find_matches(&criteria), vec!["mv002".to_string()]);
    }

    #[test]
    fn test_find_matches_disjoint_nonempty_criteria_is_empty() {
        let engine = engine();
        // Both match entries, but no entry matches both.
        let criteria = SearchCriteria::new()
            .with_genre_name("Thriller")
            .with_actor_name("Jane Doe");
        assert!(engine.find_matches(&criteria).is_empty());
    }

    #[test]
    fn test_find_matches_empty_criterion_is_ignored() {
        let engine = engine();
        // The actor matches nothing, so it must not constrain the genre hits.
        let criteria = SearchCriteria::new()
            .with_genre_name("Comedy")
            .with_actor_name("Nobody At All");
        assert_eq!(engine.find_matches(&criteria), engine.by_genre("Comedy"));
    }

    #[test]
    fn test_find_matches_season_scope_suppresses_id_prefix_search() {
        let engine = engine();
        let criteria = SearchCriteria::new()
            .with_video_id("tv001")
            .with_season_number("2");
        assert_eq!(engine.find_matches(&criteria), engine.by_season("tv001", "2"));
    }

    #[test]
    fn test_find_matches_season_and_episode_scope() {
        let engine = engine();
        let criteria = SearchCriteria::new()
            .with_video_id("tv001")
            .with_season_number("1")
            .with_episode_number("1");
        assert_eq!(engine.find_matches(&criteria), vec!["tv0010101".to_string()]);
    }

    #[test]
    fn test_find_matches_season_without_video_id_falls_back_to_other_criteria() {
        let engine = engine();
        let criteria = SearchCriteria::new()
            .with_season_number("1")
            .with_genre_name("Sci-Fi");
        assert_eq!(engine.find_matches(&criteria), engine.by_genre("Sci-Fi"));
    }

    #[test]
    fn test_find_matches_keeps_first_list_order() {
        let engine = engine();
        let criteria = SearchCriteria::new().with_video_id("tv001");
        let direct = engine.by_video_id("tv001");
        assert_eq!(engine.find_matches(&criteria), direct);
    }

    #[test]
    fn test_intersect_non_empty_drops_empty_lists() {
        let lists = vec![
            vec!["a".to_string(), "b".to_string()],
            Vec::new(),
            vec!["b".to_string(), "c".to_string()],
        ];
        assert_eq!(intersect_non_empty(lists), vec!["b".to_string()]);
    }

    #[test]
    fn test_intersect_non_empty_all_empty() {
        assert!(intersect_non_empty(vec![Vec::new(), Vec::new()]).is_empty());
        assert!(intersect_non_empty(Vec::new()).is_empty());
    }
}
