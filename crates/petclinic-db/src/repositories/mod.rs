//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_owner_repository;
mod sqlite_pet_repository;
mod sqlite_vet_repository;
mod sqlite_visit_repository;

pub use sqlite_owner_repository::SqliteOwnerRepository;
pub use sqlite_pet_repository::SqlitePetRepository;
pub use sqlite_vet_repository::SqliteVetRepository;
pub use sqlite_visit_repository::SqliteVisitRepository;
