//! Composition utilities for building repositories with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use petclinic_core::{CustomerRepos, VetRepository, VisitRepository};

use crate::repositories::{
    SqliteOwnerRepository, SqlitePetRepository, SqliteVetRepository, SqliteVisitRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build the owner and pet repositories of the customers service.
    ///
    /// Both share the pool, so both see the same database.
    pub fn build_customer_repos(pool: SqlitePool) -> CustomerRepos {
        CustomerRepos::new(
            Arc::new(SqliteOwnerRepository::new(pool.clone())),
            Arc::new(SqlitePetRepository::new(pool)),
        )
    }

    /// Create the vet repository of the vets service.
    pub fn vet_repository(pool: SqlitePool) -> Arc<dyn VetRepository> {
        Arc::new(SqliteVetRepository::new(pool))
    }

    /// Create the visit repository of the visits service.
    pub fn visit_repository(pool: SqlitePool) -> Arc<dyn VisitRepository> {
        Arc::new(SqliteVisitRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with one service's production
/// schema already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create an empty in-memory database for `service`.
    pub async fn new(service: petclinic_core::ClinicService) -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database(service).await?;
        Ok(Self { pool })
    }

    /// Create an in-memory database for `service` loaded with the sample data.
    pub async fn seeded(service: petclinic_core::ClinicService) -> anyhow::Result<Self> {
        let db = Self::new(service).await?;
        crate::seed::seed_if_empty(&db.pool, service).await?;
        Ok(db)
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Owner and pet repositories over this database.
    pub fn customer_repos(&self) -> CustomerRepos {
        CoreFactory::build_customer_repos(self.pool.clone())
    }

    /// Vet repository over this database.
    pub fn vet_repository(&self) -> Arc<dyn VetRepository> {
        CoreFactory::vet_repository(self.pool.clone())
    }

    /// Visit repository over this database.
    pub fn visit_repository(&self) -> Arc<dyn VisitRepository> {
        CoreFactory::visit_repository(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petclinic_core::{ClinicService, OwnerResource, PetResource};

    #[tokio::test]
    async fn test_customer_repos_share_one_database() {
        let db = TestDb::seeded(ClinicService::Customers).await.unwrap();
        let repos = db.customer_repos();

        let owners = OwnerResource::new(repos.owners.clone());
        let pets = PetResource::new(repos.owners, repos.pets);

        let owner = owners.find_by_id(6).await.unwrap();
        assert_eq!(owner.details.last_name.as_deref(), Some("Coleman"));

        let pet = pets.find_by_id(Some(6), 7).await.unwrap();
        assert_eq!(pet.name, "Samantha");
        assert_eq!(pet.owner.id, owner.id());
    }

    #[tokio::test]
    async fn test_seeded_visits() {
        let db = TestDb::seeded(ClinicService::Visits).await.unwrap();
        let visits = db.visit_repository().find_by_pet_id(8).await.unwrap();
        let descriptions: Vec<_> = visits
            .iter()
            .filter_map(|v| v.description.as_deref())
            .collect();
        assert_eq!(descriptions, vec!["rabies shot", "neutered"]);
    }
}
