//! Common test utilities: an in-process server over the fixture catalog.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vodhound_core::testing::{fixtures, MockCursorStore};
use vodhound_core::{CatalogService, Config, SqliteProgressStore};
use vodhound_server::{api::create_router, state::AppState};

/// In-process server with the small fixture catalog, a mock cursor store,
/// and an in-memory progress store.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock cursor store - inspect writes, inject failures
    pub cursor_store: Arc<MockCursorStore>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    pub fn new() -> Self {
        let cursor_store = Arc::new(MockCursorStore::new());
        let progress_store =
            Arc::new(SqliteProgressStore::in_memory().expect("in-memory progress store"));

        let service = Arc::new(
            CatalogService::new(
                Arc::new(fixtures::small_index()),
                Arc::clone(&cursor_store) as Arc<dyn vodhound_core::CursorStore>,
            )
            .with_progress_store(progress_store),
        );

        let state = Arc::new(AppState::new(Config::default(), service));
        let router = create_router(state);

        Self {
            router,
            cursor_store,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
