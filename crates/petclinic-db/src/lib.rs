#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
mod seed;
pub mod setup;

pub use factory::CoreFactory;

// Pool type handed to adapters by `setup_database`
pub use sqlx::SqlitePool;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{
    SqliteOwnerRepository, SqlitePetRepository, SqliteVetRepository, SqliteVisitRepository,
};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
