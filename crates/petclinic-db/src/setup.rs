//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! a service's `SQLite` database. Entry points call this with the resolved
//! database path.

use anyhow::Result;
use petclinic_core::ClinicService;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;
use tracing::info;

use crate::seed;

/// Sets up a service's `SQLite` database and ensures its schema exists.
///
/// This function:
/// 1. Creates the database file (and parent directory) if missing
/// 2. Creates the service's tables and indexes
/// 3. Loads the sample clinic data into empty tables when `seed` is set
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created, or
/// if schema creation or seeding fails.
///
/// # Example
///
/// ```rust,no_run
/// use petclinic_core::ClinicService;
/// use petclinic_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/tmp/vets.db"), ClinicService::Vets, true).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(
    db_path: &Path,
    service: ClinicService,
    seed: bool,
) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool, service).await?;

    if seed {
        let inserted = seed::seed_if_empty(&pool, service).await?;
        if inserted {
            info!(%service, path = %db_path.display(), "Loaded sample data");
        }
    }

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the service's production schema
/// and no data. The pool holds a single connection so every query sees the
/// same database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database(service: ClinicService) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    create_schema(&pool, service).await?;
    Ok(pool)
}

/// Creates the schema of one service.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool, service: ClinicService) -> Result<()> {
    let statements: &[&str] = match service {
        ClinicService::Customers => CUSTOMERS_SCHEMA,
        ClinicService::Vets => VETS_SCHEMA,
        ClinicService::Visits => VISITS_SCHEMA,
    };

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

const CUSTOMERS_SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS types (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_types_name ON types(name)",
    r"
    CREATE TABLE IF NOT EXISTS owners (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT,
        last_name TEXT,
        address TEXT,
        city TEXT,
        telephone TEXT
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name)",
    r"
    CREATE TABLE IF NOT EXISTS pets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birth_date TEXT,
        type_id INTEGER NOT NULL,
        owner_id INTEGER NOT NULL,
        FOREIGN KEY (type_id) REFERENCES types(id),
        FOREIGN KEY (owner_id) REFERENCES owners(id)
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id)",
];

const VETS_SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS vets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS specialties (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS vet_specialties (
        vet_id INTEGER NOT NULL,
        specialty_id INTEGER NOT NULL,
        FOREIGN KEY (vet_id) REFERENCES vets(id) ON DELETE CASCADE,
        FOREIGN KEY (specialty_id) REFERENCES specialties(id),
        UNIQUE(vet_id, specialty_id)
    )
    ",
];

const VISITS_SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS visits (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        pet_id INTEGER NOT NULL,
        visit_date TEXT NOT NULL,
        description TEXT
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_visits_pet_id ON visits(pet_id)",
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_each_service_gets_only_its_tables() {
        let customers = setup_test_database(ClinicService::Customers).await.unwrap();
        assert_eq!(table_names(&customers).await, vec!["owners", "pets", "types"]);

        let vets = setup_test_database(ClinicService::Vets).await.unwrap();
        assert_eq!(
            table_names(&vets).await,
            vec!["specialties", "vet_specialties", "vets"]
        );

        let visits = setup_test_database(ClinicService::Visits).await.unwrap();
        assert_eq!(table_names(&visits).await, vec!["visits"]);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = setup_test_database(ClinicService::Customers).await.unwrap();
        tokio_test::assert_ok!(create_schema(&pool, ClinicService::Customers).await);
    }

    #[tokio::test]
    async fn test_setup_database_creates_file_and_seeds_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("visits.db");

        let pool = setup_database(&path, ClinicService::Visits, true)
            .await
            .unwrap();
        assert!(path.exists());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 4);
        pool.close().await;

        // Reopening does not duplicate the sample data.
        let pool = setup_database(&path, ClinicService::Visits, true)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn test_setup_database_without_seed_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("customers.db");

        let pool = setup_database(&path, ClinicService::Customers, false)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
