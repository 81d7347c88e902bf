//! Persona CRUD handlers (create, read, update, delete, list).

use axum::extract::{Path, State};
use axum::Json;

use personas_core::{Person, PersonId};

use crate::error::ApiError;
use crate::schema::personas::{
    CreatePersonRequest, DeletePersonResponse, PersonListResponse, UpdatePersonRequest,
};
use crate::state::AppState;

/// Lists all stored records.
///
/// `GET /personas/`
pub async fn list_personas(
    State(state): State<AppState>,
) -> Result<Json<PersonListResponse>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(PersonListResponse {
        personas: store.list_all(),
    }))
}

/// Creates a new record. The id is assigned by the store.
///
/// `POST /personas/`
pub async fn create_persona(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<Json<Person>, ApiError> {
    let mut store = state.store.write().await;
    let person = store.create(req.name, req.age, req.nationality);
    tracing::debug!(id = %person.id, "created person");
    Ok(Json(person))
}

/// Fetches one record by id.
///
/// `GET /personas/{id}`
pub async fn get_persona(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Person>, ApiError> {
    let store = state.store.read().await;
    let person = store.get(PersonId(id))?;
    Ok(Json(person.clone()))
}

/// Applies a partial update to one record; only the fields present in the
/// body are changed.
///
/// `PUT /personas/{id}`
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdatePersonRequest>,
) -> Result<Json<Person>, ApiError> {
    let mut store = state.store.write().await;
    let person = store.update(PersonId(id), req.into_patch())?;
    Ok(Json(person))
}

/// Deletes one record by id.
///
/// `DELETE /personas/{id}`
pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeletePersonResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.delete(PersonId(id))?;
    tracing::debug!(id, "deleted person");
    Ok(Json(DeletePersonResponse {
        success: true,
        message: format!("person {} deleted", id),
    }))
}
