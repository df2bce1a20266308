//! Vet repository trait definition.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;
use crate::domain::Vet;

/// Read-only repository for veterinarians.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// List all vets with their specialties.
    ///
    /// Specialty order is whatever storage returns; sorting is the
    /// resource's job.
    async fn list(&self) -> Result<Vec<Vet>, RepositoryError>;
}
