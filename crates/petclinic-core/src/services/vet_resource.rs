//! Vet resource - read-only listing of the vets service.

use std::sync::Arc;

use crate::domain::Vet;
use crate::ports::{CoreError, VetRepository};

/// Read-only resource for veterinarians.
pub struct VetResource {
    repo: Arc<dyn VetRepository>,
}

impl VetResource {
    pub fn new(repo: Arc<dyn VetRepository>) -> Self {
        Self { repo }
    }

    /// All vets, each with its specialties sorted by name.
    pub async fn find_all(&self) -> Result<Vec<Vet>, CoreError> {
        let mut vets = self.repo.list().await?;
        for vet in &mut vets {
            vet.sort_specialties();
        }
        Ok(vets)
    }
}
