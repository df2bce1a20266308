//! Pet resource - pets and pet types of the customers service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{NewPet, Pet, PetRequest, PetType};
use crate::ports::{CoreError, OwnerRepository, PetRepository};
use crate::validation::{ensure_valid_id, validate_pet_request};

/// Resource for pet operations.
///
/// Needs the owner repository to bind new pets to an existing owner.
pub struct PetResource {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
}

impl PetResource {
    pub fn new(owners: Arc<dyn OwnerRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { owners, pets }
    }

    /// Get a pet by ID.
    ///
    /// `owner_id` only scopes the request path; the lookup is by pet alone.
    pub async fn find_by_id(&self, owner_id: Option<i64>, pet_id: i64) -> Result<Pet, CoreError> {
        let pet_id = ensure_valid_id(pet_id, "petId")?;
        debug!(?owner_id, pet_id, "Looking up pet");
        self.pets
            .find_by_id(pet_id)
            .await?
            .ok_or(CoreError::not_found("Pet", pet_id))
    }

    /// List all pet types.
    pub async fn find_pet_types(&self) -> Result<Vec<PetType>, CoreError> {
        Ok(self.pets.list_pet_types().await?)
    }

    /// Add a pet to an existing owner.
    pub async fn create(&self, owner_id: i64, request: &PetRequest) -> Result<Pet, CoreError> {
        let owner_id = ensure_valid_id(owner_id, "ownerId")?;
        validate_pet_request(request)?;

        let Some(owner) = self.owners.find_by_id(owner_id).await? else {
            warn!(owner_id, "Pet create requested for unknown owner");
            return Err(CoreError::not_found("Owner", owner_id));
        };
        let pet_type = self.pet_type(request.type_id).await?;

        let new_pet = NewPet {
            name: request.name.clone().unwrap_or_default(),
            birth_date: request.birth_date,
            pet_type,
            owner: owner.to_ref(),
        };
        let pet = self.pets.insert(&new_pet).await?;
        debug!(owner_id, pet_id = pet.id(), "Created pet");
        Ok(pet)
    }

    /// Overwrite name, birth date and type of an existing pet.
    ///
    /// The owner segment of the path is not checked against the pet's
    /// actual owner.
    pub async fn update(
        &self,
        owner_id: Option<i64>,
        pet_id: i64,
        request: &PetRequest,
    ) -> Result<(), CoreError> {
        let pet_id = ensure_valid_id(pet_id, "petId")?;
        validate_pet_request(request)?;

        let Some(mut pet) = self.pets.find_by_id(pet_id).await? else {
            warn!(?owner_id, pet_id, "Update requested for unknown pet");
            return Err(CoreError::not_found("Pet", pet_id));
        };
        let pet_type = self.pet_type(request.type_id).await?;

        pet.name = request.name.clone().unwrap_or_default();
        pet.birth_date = request.birth_date;
        pet.pet_type = pet_type;

        self.pets.update(&pet).await?;
        debug!(?owner_id, pet_id, "Updated pet");
        Ok(())
    }

    async fn pet_type(&self, type_id: i64) -> Result<PetType, CoreError> {
        match self.pets.find_pet_type_by_id(type_id).await? {
            Some(pet_type) => Ok(pet_type),
            None => {
                warn!(type_id, "Unknown pet type");
                Err(CoreError::not_found("PetType", type_id))
            }
        }
    }
}
