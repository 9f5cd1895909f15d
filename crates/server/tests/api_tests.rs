//! E2E tests for the HTTP surface, over the fixture catalog.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestFixture;

fn item_strings(body: &serde_json::Value, key: &str) -> Vec<String> {
    body[key]
        .as_array()
        .expect("array field")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_returns_ok() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn search_by_genre_returns_matches() {
    let fixture = TestFixture::new();
    let response = fixture
        .post("/api/v1/search", json!({"genreName": "comedy"}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(item_strings(&response.body, "items"), vec!["mv002", "mv003"]);
    assert_eq!(response.body["total"], 2);
    assert!(response.body.get("nextToken").is_none());
}

#[tokio::test]
async fn search_overflow_and_next_page_round_trip() {
    let fixture = TestFixture::new();
    let response = fixture
        .post("/api/v1/search", json!({"videoId": "tv001", "limit": 2}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = item_strings(&response.body, "items");
    assert_eq!(items.len(), 2);
    let token = response.body["nextToken"].as_str().expect("token").to_string();

    let page = fixture.get(&format!("/api/v1/search/page/{token}")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(item_strings(&page.body, "items"), vec!["tv0010201"]);
}

#[tokio::test]
async fn unknown_page_token_is_empty_not_error() {
    let fixture = TestFixture::new();
    let page = fixture.get("/api/v1/search/page/unknown-token").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(item_strings(&page.body, "items").is_empty());
}

#[tokio::test]
async fn search_survives_cursor_store_outage() {
    let fixture = TestFixture::new();
    fixture.cursor_store.fail_next("store down").await;

    let response = fixture
        .post("/api/v1/search", json!({"videoId": "tv001", "limit": 1}))
        .await;

    // The first page still comes back; only the tail is lost.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(item_strings(&response.body, "items").len(), 1);
}

#[tokio::test]
async fn video_lookup_and_miss() {
    let fixture = TestFixture::new();

    let hit = fixture.get("/api/v1/videos/mv001").await;
    assert_eq!(hit.status, StatusCode::OK);
    assert_eq!(hit.body["name"], "Night Train");

    let miss = fixture.get("/api/v1/videos/nope").await;
    assert_eq!(miss.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn video_batch_omits_misses() {
    let fixture = TestFixture::new();
    let response = fixture
        .post(
            "/api/v1/videos/batch",
            json!({"ids": ["mv001", "nope", "mv002"]}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["mv001", "mv002"]);
}

#[tokio::test]
async fn episode_navigation_routes() {
    let fixture = TestFixture::new();

    let next = fixture
        .get("/api/v1/videos/tv0010101/next?season=1&episode=1")
        .await;
    assert_eq!(next.status, StatusCode::OK);
    assert_eq!(next.body["id"], "tv0010102");

    // Crossing the season boundary.
    let crossed = fixture
        .get("/api/v1/videos/tv0010102/next?season=1&episode=2")
        .await;
    assert_eq!(crossed.body["id"], "tv0010201");

    // End of series.
    let end = fixture
        .get("/api/v1/videos/tv0010201/next?season=2&episode=1")
        .await;
    assert_eq!(end.status, StatusCode::NOT_FOUND);

    let seasons = fixture.get("/api/v1/videos/tv0010101/seasons").await;
    assert_eq!(seasons.body["seasons"], json!([1, 2]));
}

#[tokio::test]
async fn category_routes() {
    let fixture = TestFixture::new();

    let ids = fixture.get("/api/v1/categories").await;
    assert_eq!(ids.body["ids"], json!(["cat-comedy", "cat-thriller"]));

    let batch = fixture
        .post("/api/v1/categories/batch", json!({"ids": ["cat-comedy", "missing"]}))
        .await;
    assert_eq!(batch.body["categories"].as_array().unwrap().len(), 1);

    let videos = fixture.get("/api/v1/categories/cat-comedy/videos").await;
    assert_eq!(item_strings(&videos.body, "items"), vec!["mv002", "mv003"]);

    // Unknown category resolves to empty, not an error.
    let empty = fixture.get("/api/v1/categories/cat-nope/videos").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert!(item_strings(&empty.body, "items").is_empty());
}

#[tokio::test]
async fn config_endpoint_reflects_defaults() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["server"]["port"], 8080);
}
