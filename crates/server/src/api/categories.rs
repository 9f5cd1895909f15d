//! Category handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use vodhound_core::CategoryEntry;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryIdsResponse {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct CategoryVideosResponse {
    pub items: Vec<String>,
}

/// GET /api/v1/categories
pub async fn list_category_ids(State(state): State<Arc<AppState>>) -> Json<CategoryIdsResponse> {
    Json(CategoryIdsResponse {
        ids: state.service().all_category_ids(),
    })
}

/// POST /api/v1/categories/batch
///
/// Unknown ids are silently omitted.
pub async fn get_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchResponse> {
    Json(BatchResponse {
        categories: state.service().categories(&request.ids),
    })
}

/// GET /api/v1/categories/{id}/videos
///
/// An unknown category yields an empty list, matching the engine contract.
pub async fn get_category_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<CategoryVideosResponse> {
    Json(CategoryVideosResponse {
        items: state.service().matches_for_category(&id),
    })
}
