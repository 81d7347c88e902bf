//! Root greeting handler.

use axum::Json;

/// `GET /`
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "personas API. GET /personas/ lists the stored records.",
    }))
}
