//! Minimal read-only lookup service over a static id -> name directory.
//!
//! The companion program to the personas CRUD server, kept deliberately
//! small: one greeting route and one parameterized lookup route. Unknown ids
//! return a structured 404, the same policy the CRUD server uses.
//!
//! Reads configuration from environment variables:
//! - `PERSONAS_LOOKUP_PORT`: server listen port (default: "8000")

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

/// The static directory. Never mutated; lives for the process lifetime.
const DIRECTORY: &[(u64, &str)] = &[
    (1, "Juan"),
    (2, "Yolanda"),
    (3, "Marcos"),
    (4, "Carmen"),
    (5, "Susana"),
    (6, "Martin"),
    (7, "Eva"),
];

/// `GET /`
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello, world." }))
}

/// `GET /personas/{id}`
async fn lookup_persona(Path(id): Path<u64>) -> Response {
    match DIRECTORY.iter().find(|(key, _)| *key == id) {
        Some((_, name)) => Json(serde_json::json!({
            "message": format!("id {}: the selected person is {}.", id, name),
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": format!("id {}: person not found.", id),
            })),
        )
            .into_response(),
    }
}

/// Builds the two-route axum router.
fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/personas/{id}", get(lookup_persona))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PERSONAS_LOOKUP_PORT")
        .unwrap_or_else(|_| "8000".to_string());

    let app = build_router();

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("personas lookup starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
