//! Schema types for the persona CRUD API.

use serde::{Deserialize, Deserializer, Serialize};

use personas_core::{Person, PersonPatch};

/// Request to create a new person. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonRequest {
    /// Person name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Optional nationality.
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Request to update an existing person. All fields are optional; only the
/// fields present in the body are changed.
///
/// `nationality` distinguishes "absent from the request" (leave unchanged)
/// from "explicitly null" (clear the stored value). `name` and `age` are
/// non-nullable, so for those both absent and null mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonRequest {
    /// New name, if changing.
    pub name: Option<String>,
    /// New age, if changing.
    pub age: Option<i32>,
    /// New nationality: omitted = unchanged, null = clear, value = replace.
    #[serde(default, deserialize_with = "deserialize_tri_state")]
    pub nationality: Option<Option<String>>,
}

impl UpdatePersonRequest {
    /// Converts the request body into a domain patch.
    pub fn into_patch(self) -> PersonPatch {
        PersonPatch {
            name: self.name,
            age: self.age,
            nationality: self.nationality,
        }
    }
}

/// Deserializes a field that was present in the JSON body, keeping null as
/// `Some(None)`. Combined with `#[serde(default)]`, an omitted field stays
/// `None` and a present field becomes `Some(..)`.
fn deserialize_tri_state<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response listing all stored records, in id order.
#[derive(Debug, Clone, Serialize)]
pub struct PersonListResponse {
    pub personas: Vec<Person>,
}

/// Confirmation returned after a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePersonResponse {
    /// Always `true`; the error path returns 404 instead.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}
