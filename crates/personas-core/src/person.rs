//! The `Person` record and its id newtype.
//!
//! `PersonId` is a distinct newtype wrapper over `u64` so that a raw counter
//! or an unrelated integer cannot be passed where a record id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable person identifier. Assigned by the store, never by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single stored person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique id, equal to the record's key in the store.
    pub id: PersonId,
    /// Person name.
    pub name: String,
    /// Age in years. No range validation is performed at this layer.
    pub age: i32,
    /// Optional nationality. Omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}
