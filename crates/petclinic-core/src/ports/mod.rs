//! Port definitions (trait abstractions) for storage.
//!
//! Ports define the interfaces that the resources expect from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Lookups return `Option`; absence is never an error at this boundary
//! - One persist call per create/update: `insert` assigns the id, `update`
//!   rewrites an existing row

pub mod owner_repository;
pub mod pet_repository;
pub mod vet_repository;
pub mod visit_repository;

use std::sync::Arc;
use thiserror::Error;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use vet_repository::VetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;

/// Repositories owned by the customers service.
///
/// Owners and pets live in the same database; vets and visits each have
/// their own service and never appear here.
#[derive(Clone)]
pub struct CustomerRepos {
    /// Owner repository.
    pub owners: Arc<dyn OwnerRepository>,
    /// Pet and pet type repository.
    pub pets: Arc<dyn PetRepository>,
}

impl CustomerRepos {
    /// Create a new repository container.
    pub fn new(owners: Arc<dyn OwnerRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { owners, pets }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for resources to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A row disappeared between lookup and update.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, I/O, pool exhaustion).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded into a domain type.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for the resources.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes). `NotFound` and `Repository` never share a representation: the
/// first is an expected outcome, the second is an infrastructure failure.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A path identifier is not a positive integer.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A looked-up entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The request body failed required-field or parse checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage failed; not recovered locally.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// Shorthand for a missing entity.
    pub const fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether this error is the caller's fault rather than the server's.
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}
