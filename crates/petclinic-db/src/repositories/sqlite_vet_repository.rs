//! `SQLite` implementation of the vet repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::row_mappers::map_sqlx_error;
use petclinic_core::{RepositoryError, Specialty, Vet, VetRepository};

/// `SQLite` implementation of the vet repository.
pub struct SqliteVetRepository {
    pool: SqlitePool,
}

impl SqliteVetRepository {
    /// Create a new `SQLite` vet repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VetRow {
    id: i64,
    first_name: String,
    last_name: String,
}

#[derive(sqlx::FromRow)]
struct VetSpecialtyRow {
    vet_id: i64,
    id: i64,
    name: String,
}

#[async_trait]
impl VetRepository for SqliteVetRepository {
    async fn list(&self) -> Result<Vec<Vet>, RepositoryError> {
        let vets = sqlx::query_as::<_, VetRow>(
            "SELECT id, first_name, last_name FROM vets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // Link order is insertion order.
        let links = sqlx::query_as::<_, VetSpecialtyRow>(
            r"
            SELECT vs.vet_id, s.id, s.name
            FROM vet_specialties vs
            JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY vs.rowid
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut specialties: HashMap<i64, Vec<Specialty>> = HashMap::new();
        for link in links {
            specialties
                .entry(link.vet_id)
                .or_default()
                .push(Specialty::new(link.id, link.name));
        }

        Ok(vets
            .into_iter()
            .map(|row| Vet {
                specialties: specialties.remove(&row.id).unwrap_or_default(),
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_if_empty;
    use crate::setup::setup_test_database;
    use petclinic_core::ClinicService;

    #[tokio::test]
    async fn test_list_empty() {
        let pool = setup_test_database(ClinicService::Vets).await.unwrap();
        let vets = SqliteVetRepository::new(pool).list().await.unwrap();
        assert!(vets.is_empty());
    }

    #[tokio::test]
    async fn test_list_sample_vets_with_specialties() {
        let pool = setup_test_database(ClinicService::Vets).await.unwrap();
        seed_if_empty(&pool, ClinicService::Vets).await.unwrap();

        let vets = SqliteVetRepository::new(pool).list().await.unwrap();
        assert_eq!(vets.len(), 6);

        let carter = &vets[0];
        assert_eq!(carter.last_name, "Carter");
        assert!(carter.specialties.is_empty());

        let douglas = vets.iter().find(|v| v.last_name == "Douglas").unwrap();
        let names: Vec<&str> = douglas
            .specialties
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["surgery", "dentistry"]);
    }
}
