//! In-memory person registry: the data model and CRUD store shared by the
//! personas HTTP server.
//!
//! This crate has no HTTP or async dependencies; it owns the `Person` record
//! type and the [`PersonStore`] that manages the collection.

pub mod error;
pub mod person;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use person::{Person, PersonId};
pub use store::{PersonPatch, PersonStore};
