//! Vet handlers.

use axum::Json;
use axum::extract::State;
use petclinic_core::Vet;

use crate::error::HttpError;
use crate::state::VetsState;

/// List all vets with sorted specialties.
pub async fn list(State(state): State<VetsState>) -> Result<Json<Vec<Vet>>, HttpError> {
    Ok(Json(state.vets.find_all().await?))
}
