//! Binary entrypoint for the personas HTTP server.
//!
//! Reads configuration from environment variables:
//! - `PERSONAS_PORT`: server listen port (default: "3000")

use personas_server::router::build_router;
use personas_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PERSONAS_PORT")
        .unwrap_or_else(|_| "3000".to_string());

    let state = AppState::seeded();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("personas server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
