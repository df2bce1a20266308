//! Pet and pet type handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use petclinic_core::validation::parse_identifier;
use petclinic_core::{PetRequest, PetType};

use super::json_body;
use crate::dto::PetDetailsDto;
use crate::error::HttpError;
use crate::state::CustomersState;

/// List all pet types.
pub async fn pet_types(
    State(state): State<CustomersState>,
) -> Result<Json<Vec<PetType>>, HttpError> {
    Ok(Json(state.pets.find_pet_types().await?))
}

/// Add a pet to an owner.
pub async fn create(
    State(state): State<CustomersState>,
    Path(owner_id): Path<String>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PetDetailsDto>), HttpError> {
    let owner_id = parse_identifier(&owner_id, "ownerId")?;
    let request = json_body(payload)?;
    let pet = state.pets.create(owner_id, &request).await?;
    Ok((StatusCode::CREATED, Json(pet.into())))
}

/// Get a pet. The owner segment only scopes the path.
pub async fn get(
    State(state): State<CustomersState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
) -> Result<Json<PetDetailsDto>, HttpError> {
    let pet_id = parse_identifier(&pet_id, "petId")?;
    let pet = state.pets.find_by_id(owner_id.parse().ok(), pet_id).await?;
    Ok(Json(pet.into()))
}

/// Overwrite a pet's name, birth date and type.
pub async fn update(
    State(state): State<CustomersState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    payload: Result<Json<PetRequest>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let pet_id = parse_identifier(&pet_id, "petId")?;
    let request = json_body(payload)?;
    state
        .pets
        .update(owner_id.parse().ok(), pet_id, &request)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
