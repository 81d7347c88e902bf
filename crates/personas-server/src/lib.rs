//! HTTP/JSON API server exposing CRUD operations over an in-memory person
//! registry.
//!
//! The domain logic lives in `personas-core`; this crate contains the server
//! framework, API schema types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
