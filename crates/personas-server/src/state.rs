//! Application state with the shared `PersonStore` for concurrent access.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::RwLock<>>` for use with
//! axum handlers. `RwLock` rather than `Mutex` because `PersonStore` is
//! `Sync`, so read-only handlers (get, list) can proceed concurrently while
//! mutations take the write lock. Handlers await the lock without blocking
//! the tokio runtime.

use std::sync::Arc;

use personas_core::PersonStore;

/// Shared application state for the HTTP server.
///
/// Cloning is cheap; all clones point at the same store.
#[derive(Clone)]
pub struct AppState {
    /// The shared person store.
    pub store: Arc<tokio::sync::RwLock<PersonStore>>,
}

impl AppState {
    /// Creates state around the standard seeded store (ids 1 through 4).
    pub fn seeded() -> Self {
        AppState {
            store: Arc::new(tokio::sync::RwLock::new(PersonStore::seeded())),
        }
    }

    /// Creates state around an empty store (for testing).
    pub fn empty() -> Self {
        AppState {
            store: Arc::new(tokio::sync::RwLock::new(PersonStore::new())),
        }
    }
}
