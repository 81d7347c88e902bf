//! Error types for the person store.
//!
//! Uses `thiserror` for structured, matchable error variants. The store has
//! exactly one failure mode: an operation referenced an id that is not
//! present in the collection.

use thiserror::Error;

use crate::person::PersonId;

/// Errors produced by [`crate::store::PersonStore`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The given id is not present in the store.
    #[error("person not found: id {id}")]
    NotFound { id: PersonId },
}
