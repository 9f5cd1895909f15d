use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{categories, handlers, middleware, search, videos};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Combined search and pagination
        .route("/search", post(search::search))
        .route("/search/page/{token}", get(search::get_page))
        // Video metadata and episode navigation
        .route("/videos/batch", post(videos::get_batch))
        .route("/videos/{id}", get(videos::get_video))
        .route("/videos/{id}/seasons", get(videos::get_seasons))
        .route("/videos/{id}/next", get(videos::get_next_episode))
        .route("/videos/{id}/previous", get(videos::get_previous_episode))
        // Categories
        .route("/categories", get(categories::list_category_ids))
        .route("/categories/batch", post(categories::get_batch))
        .route("/categories/{id}/videos", get(categories::get_category_videos))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
