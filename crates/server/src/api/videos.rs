//! Video metadata and episode-navigation handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use vodhound_core::VideoEntry;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub videos: Vec<VideoEntry>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    pub season: i64,
    #[serde(default)]
    pub episode: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SeasonsResponse {
    pub seasons: Vec<i64>,
}

/// GET /api/v1/videos/{id}
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VideoEntry>, impl IntoResponse> {
    match state.service().metadata(&id) {
        Some(entry) => Ok(Json(entry)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Unknown video id: {id}"),
            }),
        )),
    }
}

/// POST /api/v1/videos/batch
///
/// Unknown ids are silently omitted from the response.
pub async fn get_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchResponse> {
    Json(BatchResponse {
        videos: state.service().metadata_batch(&request.ids),
    })
}

/// GET /api/v1/videos/{id}/seasons
pub async fn get_seasons(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<SeasonsResponse> {
    Json(SeasonsResponse {
        seasons: state.service().available_seasons(&id),
    })
}

/// GET /api/v1/videos/{id}/next?season=..&episode=..
///
/// 404 means the end of the series, not a bad request.
pub async fn get_next_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<EpisodeQuery>,
) -> Result<Json<VideoEntry>, impl IntoResponse> {
    match state
        .service()
        .next_episode(&id, query.season, query.episode)
    {
        Some(entry) => Ok(Json(entry)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No next episode".to_string(),
            }),
        )),
    }
}

/// GET /api/v1/videos/{id}/previous?season=..&episode=..
pub async fn get_previous_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<EpisodeQuery>,
) -> Result<Json<VideoEntry>, impl IntoResponse> {
    match state
        .service()
        .previous_episode(&id, query.season, query.episode)
    {
        Some(entry) => Ok(Json(entry)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No previous episode".to_string(),
            }),
        )),
    }
}
