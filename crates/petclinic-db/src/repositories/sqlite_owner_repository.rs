//! `SQLite` implementation of the owner repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::row_mappers::{PET_SELECT, PetRow, map_sqlx_error};
use petclinic_core::{Owner, OwnerDetails, OwnerRepository, Pet, RepositoryError};

/// `SQLite` implementation of the owner repository.
///
/// Owners are returned with their pets attached.
pub struct SqliteOwnerRepository {
    pool: SqlitePool,
}

impl SqliteOwnerRepository {
    /// Create a new `SQLite` owner repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn pets_of(&self, owner_id: i64) -> Result<Vec<Pet>, RepositoryError> {
        let rows = sqlx::query_as::<_, PetRow>(&format!(
            "{PET_SELECT} WHERE p.owner_id = ? ORDER BY p.name, p.id"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Pet::from).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Internal row types for database queries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
struct OwnerRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    telephone: Option<String>,
}

impl OwnerRow {
    fn into_owner(self, pets: Vec<Pet>) -> Owner {
        Owner::from_storage(
            self.id,
            OwnerDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                address: self.address,
                city: self.city,
                telephone: self.telephone,
            },
            pets,
        )
    }
}

const OWNER_SELECT: &str =
    "SELECT id, first_name, last_name, address, city, telephone FROM owners";

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl OwnerRepository for SqliteOwnerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, RepositoryError> {
        let row = sqlx::query_as::<_, OwnerRow>(&format!("{OWNER_SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let pets = self.pets_of(row.id).await?;
                Ok(Some(row.into_owner(pets)))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Owner>, RepositoryError> {
        let rows = sqlx::query_as::<_, OwnerRow>(&format!("{OWNER_SELECT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // One query for every pet, grouped by owner afterwards.
        let pet_rows =
            sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} ORDER BY p.name, p.id"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        let mut pets_by_owner: HashMap<i64, Vec<Pet>> = HashMap::new();
        for pet_row in pet_rows {
            pets_by_owner
                .entry(pet_row.owner_id)
                .or_default()
                .push(pet_row.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let pets = pets_by_owner.remove(&row.id).unwrap_or_default();
                row.into_owner(pets)
            })
            .collect())
    }

    async fn insert(&self, owner: &OwnerDetails) -> Result<Owner, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO owners (first_name, last_name, address, city, telephone) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.address)
        .bind(&owner.city)
        .bind(&owner.telephone)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Owner::from_storage(
            result.last_insert_rowid(),
            owner.clone(),
            Vec::new(),
        ))
    }

    async fn update(&self, owner: &Owner) -> Result<(), RepositoryError> {
        let details = &owner.details;
        let result = sqlx::query(
            r"
            UPDATE owners
            SET first_name = ?, last_name = ?, address = ?, city = ?, telephone = ?
            WHERE id = ?
            ",
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.address)
        .bind(&details.city)
        .bind(&details.telephone)
        .bind(owner.id())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Owner with ID {}",
                owner.id()
            )));
        }
        Ok(())
    }
}
