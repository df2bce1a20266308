//! Visit resource.
//!
//! Visits reference pets by id only. Creating a visit does not check that
//! the pet exists in the customers service.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Local;
use tracing::debug;

use crate::domain::{NewVisit, Visit, VisitRequest, Visits};
use crate::ports::{CoreError, VisitRepository};
use crate::validation::{ensure_valid_id, validate_visit_request};

/// Resource for visit operations.
pub struct VisitResource {
    repo: Arc<dyn VisitRepository>,
}

impl VisitResource {
    pub fn new(repo: Arc<dyn VisitRepository>) -> Self {
        Self { repo }
    }

    /// Visits of one pet, in storage order.
    pub async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, CoreError> {
        let pet_id = ensure_valid_id(pet_id, "petId")?;
        Ok(self.repo.find_by_pet_id(pet_id).await?)
    }

    /// Visits of every pet in `pet_ids`, fetched with a single query.
    pub async fn find_by_pet_ids(&self, pet_ids: &BTreeSet<i64>) -> Result<Visits, CoreError> {
        if pet_ids.is_empty() {
            return Err(CoreError::Validation(
                "petId must list at least one pet".to_string(),
            ));
        }
        let items = self.repo.find_by_pet_ids(pet_ids).await?;
        debug!(pets = pet_ids.len(), visits = items.len(), "Batch visit lookup");
        Ok(Visits { items })
    }

    /// Record a visit for `pet_id`.
    ///
    /// The path pet id always wins over a `petId` in the body. A missing
    /// date means today.
    pub async fn create(&self, pet_id: i64, request: &VisitRequest) -> Result<Visit, CoreError> {
        let pet_id = ensure_valid_id(pet_id, "petId")?;
        validate_visit_request(request)?;

        let new_visit = NewVisit {
            pet_id,
            date: request
                .date
                .unwrap_or_else(|| Local::now().date_naive()),
            description: request.description.clone(),
        };
        let visit = self.repo.insert(&new_visit).await?;
        debug!(pet_id, visit_id = visit.id(), "Created visit");
        Ok(visit)
    }
}
