//! HTTP handler modules for the personas API.
//!
//! Handlers are thin: parse the request, acquire the store lock, delegate to
//! [`personas_core::PersonStore`], and return JSON. No business logic lives
//! here.

pub mod index;
pub mod personas;
