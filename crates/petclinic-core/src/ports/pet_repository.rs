//! Pet repository trait definition.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;
use crate::domain::{NewPet, Pet, PetType};

/// Repository for pets and the pet type reference data.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Get a pet by its database ID, with its type and owner reference.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, RepositoryError>;

    /// Get a pet type by its database ID.
    async fn find_pet_type_by_id(&self, id: i64) -> Result<Option<PetType>, RepositoryError>;

    /// List all pet types, ordered by name.
    async fn list_pet_types(&self) -> Result<Vec<PetType>, RepositoryError>;

    /// Insert a new pet for `pet.owner`.
    ///
    /// Returns the persisted pet with its assigned ID.
    async fn insert(&self, pet: &NewPet) -> Result<Pet, RepositoryError>;

    /// Rewrite name, birth date and type of an existing pet.
    ///
    /// The owner link is not changed.
    async fn update(&self, pet: &Pet) -> Result<(), RepositoryError>;
}
