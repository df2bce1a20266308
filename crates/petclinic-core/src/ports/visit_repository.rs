//! Visit repository trait definition.

use std::collections::BTreeSet;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;
use crate::domain::{NewVisit, Visit};

/// Repository for visits, keyed by pet id.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// All visits of one pet, in storage order.
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, RepositoryError>;

    /// All visits whose pet id is in `pet_ids`, in storage order.
    ///
    /// Issued as a single query over the whole key set.
    async fn find_by_pet_ids(&self, pet_ids: &BTreeSet<i64>)
    -> Result<Vec<Visit>, RepositoryError>;

    /// Insert a new visit.
    ///
    /// Returns the persisted visit with its assigned ID.
    async fn insert(&self, visit: &NewVisit) -> Result<Visit, RepositoryError>;
}
