//! Combined search and pagination handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use vodhound_core::SearchCriteria;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Page size for this request.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    25
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<String>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<String>,
}

/// POST /api/v1/search
///
/// Resolve matching catalog ids and return the first page. When the result
/// overflows `limit`, the response carries an opaque token for the rest.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let service = state.service();
    let matches = service.resolve_matches(&request.criteria);
    let total = matches.len();
    let page = service.paginate(matches, request.limit, "search").await;

    Json(SearchResponse {
        items: page.items,
        total,
        next_token: page.next_token,
    })
}

/// GET /api/v1/search/page/{token}
///
/// Fetch the persisted remainder for a token. Unknown, expired, and
/// unreachable all look the same: an empty list.
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Json<PageResponse> {
    let items = state.service().resolve_page(&token).await;
    Json(PageResponse { items })
}
