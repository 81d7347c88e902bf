//! The CRUD manager for person records.
//!
//! [`PersonStore`] is the sole owner of the in-memory collection; every
//! lookup and mutation passes through it. Records live in a `BTreeMap` keyed
//! by [`PersonId`], so listing is deterministic (id order). A monotonic
//! counter assigns new ids; ids are never reused, even after deletion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::person::{Person, PersonId};

/// A partial update to an existing record.
///
/// Fields set to `None` are left unchanged. `nationality` is doubly
/// optional: the outer `None` means "leave unchanged", `Some(None)` means
/// "explicitly clear", and `Some(Some(value))` overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New age, if changing.
    pub age: Option<i32>,
    /// New nationality: unchanged / cleared / replaced.
    pub nationality: Option<Option<String>>,
}

impl PersonPatch {
    /// Returns `true` if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.nationality.is_none()
    }
}

/// Owns the person collection and the id counter.
///
/// Invariants:
/// - every key equals the `id` field of its record;
/// - `next_id` is strictly greater than every id ever issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonStore {
    /// All records indexed by their id.
    records: BTreeMap<PersonId, Person>,
    /// Counter for the next id to assign.
    next_id: u64,
}

impl PersonStore {
    /// Creates an empty store. The first created record gets id 1.
    pub fn new() -> Self {
        PersonStore {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Builds a store from existing records.
    ///
    /// The counter starts one past the maximum existing id, so ids issued
    /// later never collide with the seed set.
    pub fn with_records(records: impl IntoIterator<Item = Person>) -> Self {
        let records: BTreeMap<PersonId, Person> =
            records.into_iter().map(|p| (p.id, p)).collect();
        let next_id = records.keys().last().map_or(1, |id| id.0 + 1);
        PersonStore { records, next_id }
    }

    /// Builds the standard four-record demo store (ids 1 through 4).
    pub fn seeded() -> Self {
        Self::with_records([
            Person {
                id: PersonId(1),
                name: "Juan".to_string(),
                age: 30,
                nationality: Some("Spanish".to_string()),
            },
            Person {
                id: PersonId(2),
                name: "María".to_string(),
                age: 25,
                nationality: Some("Argentinian".to_string()),
            },
            Person {
                id: PersonId(3),
                name: "Luis".to_string(),
                age: 40,
                nationality: Some("Mexican".to_string()),
            },
            Person {
                id: PersonId(4),
                name: "Ana".to_string(),
                age: 35,
                nationality: Some("Colombian".to_string()),
            },
        ])
    }

    /// Creates a new record with the next available id and returns it.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        age: i32,
        nationality: Option<String>,
    ) -> Person {
        let person = Person {
            id: PersonId(self.next_id),
            name: name.into(),
            age,
            nationality,
        };
        self.next_id += 1;
        self.records.insert(person.id, person.clone());
        person
    }

    /// Looks up a record by id.
    pub fn get(&self, id: PersonId) -> Result<&Person, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound { id })
    }

    /// Applies a partial update to an existing record and returns the
    /// updated record. Fields absent from the patch keep their prior values.
    pub fn update(&mut self, id: PersonId, patch: PersonPatch) -> Result<Person, StoreError> {
        let person = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        if let Some(name) = patch.name {
            person.name = name;
        }
        if let Some(age) = patch.age {
            person.age = age;
        }
        if let Some(nationality) = patch.nationality {
            person.nationality = nationality;
        }
        Ok(person.clone())
    }

    /// Removes a record by id. The id counter is unaffected, so the id is
    /// never reissued.
    pub fn delete(&mut self, id: PersonId) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    /// Returns all records in id order.
    pub fn list_all(&self) -> Vec<Person> {
        self.records.values().cloned().collect()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}
