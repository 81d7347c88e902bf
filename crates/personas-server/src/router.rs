//! Router assembly for the personas HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. The collection routes keep
/// their trailing slash to match the published API surface. CORS is
/// permissive; TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route(
            "/personas/",
            get(handlers::personas::list_personas)
                .post(handlers::personas::create_persona),
        )
        .route(
            "/personas/{id}",
            get(handlers::personas::get_persona)
                .put(handlers::personas::update_persona)
                .delete(handlers::personas::delete_persona),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
