//! Owner repository trait definition.
//!
//! This port defines the interface for owner persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;
use crate::domain::{Owner, OwnerDetails};

/// Repository for owner persistence operations.
///
/// # Design Rules
///
/// - Returned owners carry their pets
/// - `insert` is the only place an owner id is assigned
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Get an owner by its database ID.
    ///
    /// Returns `Ok(None)` if the owner doesn't exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, RepositoryError>;

    /// List all owners in storage order.
    async fn list(&self) -> Result<Vec<Owner>, RepositoryError>;

    /// Insert a new owner.
    ///
    /// Returns the persisted owner with its assigned ID and no pets.
    async fn insert(&self, owner: &OwnerDetails) -> Result<Owner, RepositoryError>;

    /// Rewrite the contact details of an existing owner.
    ///
    /// Pets are not touched. Returns `Err(RepositoryError::NotFound)` if
    /// the owner doesn't exist.
    async fn update(&self, owner: &Owner) -> Result<(), RepositoryError>;
}
