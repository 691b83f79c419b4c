//! Pokémon handlers - CRUD operations and lookups.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::MutationResponse;
use crate::error::HttpError;
use crate::state::AppState;
use pokedex_core::{Pokemon, PokemonUpdate};

/// List all Pokémon.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pokemon>>, HttpError> {
    Ok(Json(state.core.pokemon().list().await?))
}

/// Get a single Pokémon by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Pokemon>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.pokemon().get_by_id(id).await?))
}

/// Get a Pokémon by case-insensitive name.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, HttpError> {
    Ok(Json(state.core.pokemon().get_by_name(&name).await?))
}

/// Create a Pokémon with a caller-assigned ID.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Pokemon>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), HttpError> {
    let Json(pokemon) = body?;
    let created = state.core.pokemon().create(pokemon).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::added(created))))
}

/// Partially update an existing Pokémon.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<PokemonUpdate>, JsonRejection>,
) -> Result<Json<MutationResponse>, HttpError> {
    let Path(id) = id?;
    let Json(update) = body?;
    let updated = state.core.pokemon().update(id, update).await?;
    Ok(Json(MutationResponse::updated(updated)))
}

/// Delete a Pokémon and its children.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MutationResponse>, HttpError> {
    let Path(id) = id?;
    let deleted = state.core.pokemon().delete(id).await?;
    Ok(Json(MutationResponse::deleted(deleted)))
}
