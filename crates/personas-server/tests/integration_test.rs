//! End-to-end integration tests for the personas HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! PersonStore -> HTTP response. Each test builds a fresh seeded router and
//! uses `tower::ServiceExt::oneshot` to send requests directly, without
//! starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use personas_server::router::build_router;
use personas_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router backed by the standard seeded store (ids 1-4).
fn test_app() -> Router {
    build_router(AppState::seeded())
}

/// Sends a request with an optional JSON body and returns (status, json).
async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "GET", path, None).await
}

async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", path, Some(body)).await
}

async fn put_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "PUT", path, Some(body)).await
}

async fn delete_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "DELETE", path, None).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_greeting() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("personas"));
}

#[tokio::test]
async fn list_returns_seed_records_in_id_order() {
    let app = test_app();
    let (status, body) = get_json(&app, "/personas/").await;
    assert_eq!(status, StatusCode::OK);
    let personas = body["personas"].as_array().unwrap();
    assert_eq!(personas.len(), 4);
    let ids: Vec<i64> = personas.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(personas[0]["name"], "Juan");
}

#[tokio::test]
async fn create_assigns_next_id_after_seeds() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/personas/", json!({ "name": "Eva", "age": 28 })).await;
    assert_eq!(status, StatusCode::OK, "create failed: {:?}", body);
    assert_eq!(body["id"], 5);
    assert_eq!(body["name"], "Eva");
    assert_eq!(body["age"], 28);
    // Absent nationality is omitted from the JSON entirely.
    assert!(body.get("nationality").is_none());

    let (status, fetched) = get_json(&app, "/personas/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn create_accepts_nationality() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/personas/",
        json!({ "name": "Tom", "age": 40, "nationality": "British" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nationality"], "British");
}

#[tokio::test]
async fn get_existing_record() {
    let app = test_app();
    let (status, body) = get_json(&app, "/personas/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Luis");
    assert_eq!(body["age"], 40);
    assert_eq!(body["nationality"], "Mexican");
}

#[tokio::test]
async fn get_unknown_id_is_structured_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/personas/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = test_app();
    let (status, body) = put_json(&app, "/personas/2", json!({ "age": 26 })).await;
    assert_eq!(status, StatusCode::OK, "update failed: {:?}", body);
    assert_eq!(body["age"], 26);
    assert_eq!(body["name"], "María");
    assert_eq!(body["nationality"], "Argentinian");
}

#[tokio::test]
async fn update_with_empty_body_changes_nothing() {
    let app = test_app();
    let (_, before) = get_json(&app, "/personas/1").await;
    let (status, after) = put_json(&app, "/personas/1", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_with_null_nationality_clears_it() {
    let app = test_app();
    let (status, body) =
        put_json(&app, "/personas/4", json!({ "nationality": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("nationality").is_none());
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = test_app();
    let (status, body) = put_json(&app, "/personas/42", json!({ "age": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = test_app();
    let (status, body) = delete_json(&app, "/personas/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains('2'));

    let (status, _) = get_json(&app, "/personas/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete_json(&app, "/personas/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_ids_are_never_reissued() {
    let app = test_app();
    let (_, eva) = post_json(&app, "/personas/", json!({ "name": "Eva", "age": 28 })).await;
    assert_eq!(eva["id"], 5);

    let (status, _) = delete_json(&app, "/personas/2").await;
    assert_eq!(status, StatusCode::OK);

    let (_, tom) = post_json(&app, "/personas/", json!({ "name": "Tom", "age": 40 })).await;
    assert_eq!(tom["id"], 6);
}

#[tokio::test]
async fn list_length_tracks_creates_and_deletes() {
    let app = test_app();
    post_json(&app, "/personas/", json!({ "name": "Eva", "age": 28 })).await;
    post_json(&app, "/personas/", json!({ "name": "Tom", "age": 40 })).await;
    delete_json(&app, "/personas/1").await;

    let (_, body) = get_json(&app, "/personas/").await;
    assert_eq!(body["personas"].as_array().unwrap().len(), 5);
}
