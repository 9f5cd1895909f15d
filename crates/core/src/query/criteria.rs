//! Search criteria supplied by the voice-directive layer.

use serde::{Deserialize, Serialize};

/// A multi-criterion search request. All fields are independently optional;
/// which sub-queries run depends on which fields are present (see
/// [`super::QueryEngine::find_matches`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Entry-id prefix to match.
    pub video_id: Option<String>,
    /// Title prefix to match.
    pub video_name: Option<String>,
    /// Genre to match exactly (case-insensitive).
    pub genre_name: Option<String>,
    /// Actor to match exactly (case-insensitive).
    pub actor_name: Option<String>,
    /// Live-channel call sign to match exactly (case-insensitive).
    pub channel_call_sign: Option<String>,
    /// Season scope, normalized to its decimal string form by the caller.
    pub season_number: Option<String>,
    /// Episode scope, normalized like `season_number`.
    pub episode_number: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    pub fn with_video_name(mut self, video_name: impl Into<String>) -> Self {
        self.video_name = Some(video_name.into());
        self
    }

    pub fn with_genre_name(mut self, genre_name: impl Into<String>) -> Self {
        self.genre_name = Some(genre_name.into());
        self
    }

    pub fn with_actor_name(mut self, actor_name: impl Into<String>) -> Self {
        self.actor_name = Some(actor_name.into());
        self
    }

    pub fn with_channel_call_sign(mut self, call_sign: impl Into<String>) -> Self {
        self.channel_call_sign = Some(call_sign.into());
        self
    }

    pub fn with_season_number(mut self, season_number: impl Into<String>) -> Self {
        self.season_number = Some(season_number.into());
        self
    }

    pub fn with_episode_number(mut self, episode_number: impl Into<String>) -> Self {
        self.episode_number = Some(episode_number.into());
        self
    }

    /// Whether no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.video_id.is_none()
            && self.video_name.is_none()
            && self.genre_name.is_none()
            && self.actor_name.is_none()
            && self.channel_call_sign.is_none()
            && self.season_number.is_none()
            && self.episode_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let criteria = SearchCriteria::new()
            .with_actor_name("Jane Doe")
            .with_genre_name("Comedy");
        assert_eq!(criteria.actor_name.as_deref(), Some("Jane Doe"));
        assert_eq!(criteria.genre_name.as_deref(), Some("Comedy"));
        assert!(criteria.video_id.is_none());
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(SearchCriteria::default().is_empty());
    }

    #[test]
    fn test_deserializes_partial_camel_case() {
        let json = r#"{"genreName": "comedy", "seasonNumber": "2"}"#;
        let criteria: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.genre_name.as_deref(), Some("comedy"));
        assert_eq!(criteria.season_number.as_deref(), Some("2"));
        assert!(criteria.video_name.is_none());
    }
}
