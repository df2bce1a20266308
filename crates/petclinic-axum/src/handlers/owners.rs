//! Owner handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use petclinic_core::OwnerRequest;
use petclinic_core::validation::parse_identifier;

use super::json_body;
use crate::dto::OwnerDto;
use crate::error::HttpError;
use crate::state::CustomersState;

/// Create an owner.
pub async fn create(
    State(state): State<CustomersState>,
    payload: Result<Json<OwnerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OwnerDto>), HttpError> {
    let request = json_body(payload)?;
    let owner = state.owners.create(&request).await?;
    Ok((StatusCode::CREATED, Json(owner.into())))
}

/// Get an owner with its pets.
pub async fn get(
    State(state): State<CustomersState>,
    Path(owner_id): Path<String>,
) -> Result<Json<OwnerDto>, HttpError> {
    let owner_id = parse_identifier(&owner_id, "ownerId")?;
    Ok(Json(state.owners.find_by_id(owner_id).await?.into()))
}

/// List all owners.
pub async fn list(State(state): State<CustomersState>) -> Result<Json<Vec<OwnerDto>>, HttpError> {
    let owners = state.owners.find_all().await?;
    Ok(Json(owners.into_iter().map(OwnerDto::from).collect()))
}

/// Overwrite an owner's contact details.
pub async fn update(
    State(state): State<CustomersState>,
    Path(owner_id): Path<String>,
    payload: Result<Json<OwnerRequest>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let owner_id = parse_identifier(&owner_id, "ownerId")?;
    let request = json_body(payload)?;
    state.owners.update(owner_id, &request).await?;
    Ok(StatusCode::NO_CONTENT)
}
