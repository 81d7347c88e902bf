//! API schema types: request and response bodies for each endpoint.

pub mod personas;
