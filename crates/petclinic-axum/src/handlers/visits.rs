//! Visit handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use petclinic_core::validation::{parse_identifier, parse_pet_ids};
use petclinic_core::{Visit, VisitRequest, Visits};
use serde::Deserialize;

use super::json_body;
use crate::error::HttpError;
use crate::state::VisitsState;

/// Query string of the batch lookup: `?petId=1,2,3`.
#[derive(Debug, Deserialize)]
pub struct PetIdsQuery {
    #[serde(rename = "petId")]
    pub pet_id: Option<String>,
}

/// Record a visit. The owner segment is not interpreted (`*` is common).
pub async fn create(
    State(state): State<VisitsState>,
    Path((_owner_id, pet_id)): Path<(String, String)>,
    payload: Result<Json<VisitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Visit>), HttpError> {
    let pet_id = parse_identifier(&pet_id, "petId")?;
    let request = json_body(payload)?;
    let visit = state.visits.create(pet_id, &request).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

/// Visits of one pet.
pub async fn list_for_pet(
    State(state): State<VisitsState>,
    Path((_owner_id, pet_id)): Path<(String, String)>,
) -> Result<Json<Vec<Visit>>, HttpError> {
    let pet_id = parse_identifier(&pet_id, "petId")?;
    Ok(Json(state.visits.find_by_pet_id(pet_id).await?))
}

/// Visits of several pets at once, wrapped under `items`.
pub async fn list_for_pets(
    State(state): State<VisitsState>,
    query: Result<Query<PetIdsQuery>, QueryRejection>,
) -> Result<Json<Visits>, HttpError> {
    let Query(query) = query?;
    let pet_ids = parse_pet_ids(query.pet_id.as_deref().unwrap_or_default())?;
    Ok(Json(state.visits.find_by_pet_ids(&pet_ids).await?))
}
