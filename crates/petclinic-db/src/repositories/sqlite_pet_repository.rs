//! `SQLite` implementation of the pet repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::row_mappers::{PET_SELECT, PetRow, map_sqlx_error};
use petclinic_core::{NewPet, Pet, PetRepository, PetType, RepositoryError};

/// `SQLite` implementation of the pet repository.
pub struct SqlitePetRepository {
    pool: SqlitePool,
}

impl SqlitePetRepository {
    /// Create a new `SQLite` pet repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PetTypeRow {
    id: i64,
    name: String,
}

impl From<PetTypeRow> for PetType {
    fn from(row: PetTypeRow) -> Self {
        Self::new(row.id, row.name)
    }
}

#[async_trait]
impl PetRepository for SqlitePetRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, RepositoryError> {
        let row = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Pet::from))
    }

    async fn find_pet_type_by_id(&self, id: i64) -> Result<Option<PetType>, RepositoryError> {
        let row = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PetType::from))
    }

    async fn list_pet_types(&self) -> Result<Vec<PetType>, RepositoryError> {
        let rows = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PetType::from).collect())
    }

    async fn insert(&self, pet: &NewPet) -> Result<Pet, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO pets (name, birth_date, type_id, owner_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&pet.name)
        .bind(pet.birth_date)
        .bind(pet.pet_type.id)
        .bind(pet.owner.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Pet::from_storage(result.last_insert_rowid(), pet.clone()))
    }

    async fn update(&self, pet: &Pet) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE pets SET name = ?, birth_date = ?, type_id = ? WHERE id = ?")
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(pet.pet_type.id)
                .bind(pet.id())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Pet with ID {}", pet.id())));
        }
        Ok(())
    }
}
