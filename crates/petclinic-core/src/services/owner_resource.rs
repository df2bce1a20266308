//! Owner resource - create, read and update owners.

use std::sync::Arc;

use tracing::{debug, warn};

use super::owner_mapper::map_owner_request;
use crate::domain::{Owner, OwnerDetails, OwnerRequest};
use crate::ports::{CoreError, OwnerRepository};
use crate::validation::{ensure_valid_id, validate_owner_request};

/// Resource for owner operations.
pub struct OwnerResource {
    repo: Arc<dyn OwnerRepository>,
}

impl OwnerResource {
    /// Create a new owner resource with the given repository.
    pub fn new(repo: Arc<dyn OwnerRepository>) -> Self {
        Self { repo }
    }

    /// Create an owner. Every contact field is required.
    pub async fn create(&self, request: &OwnerRequest) -> Result<Owner, CoreError> {
        validate_owner_request(request)?;

        let details = map_owner_request(OwnerDetails::default(), request);
        let owner = self.repo.insert(&details).await?;
        debug!(owner_id = owner.id(), "Created owner");
        Ok(owner)
    }

    /// Get an owner by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Owner, CoreError> {
        let id = ensure_valid_id(id, "ownerId")?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::not_found("Owner", id))
    }

    /// List all owners in storage order.
    pub async fn find_all(&self) -> Result<Vec<Owner>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Overwrite an existing owner's contact details.
    ///
    /// The request is validated like a create, so every field is present
    /// and the overwrite leaves no field cleared.
    pub async fn update(&self, id: i64, request: &OwnerRequest) -> Result<(), CoreError> {
        let id = ensure_valid_id(id, "ownerId")?;
        validate_owner_request(request)?;

        let Some(existing) = self.repo.find_by_id(id).await? else {
            warn!(owner_id = id, "Update requested for unknown owner");
            return Err(CoreError::not_found("Owner", id));
        };

        let owner = map_owner_request(existing, request);
        self.repo.update(&owner).await?;
        debug!(owner_id = id, "Updated owner");
        Ok(())
    }
}
