//! `SQLite` implementation of the visit repository.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::row_mappers::map_sqlx_error;
use petclinic_core::{NewVisit, RepositoryError, Visit, VisitRepository};

/// `SQLite` implementation of the visit repository.
pub struct SqliteVisitRepository {
    pool: SqlitePool,
}

impl SqliteVisitRepository {
    /// Create a new `SQLite` visit repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    pet_id: i64,
    visit_date: NaiveDate,
    description: Option<String>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Self::from_storage(
            row.id,
            NewVisit {
                pet_id: row.pet_id,
                date: row.visit_date,
                description: row.description,
            },
        )
    }
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i64) -> Result<Vec<Visit>, RepositoryError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            "SELECT id, pet_id, visit_date, description FROM visits WHERE pet_id = ? ORDER BY id",
        )
        .bind(pet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn find_by_pet_ids(
        &self,
        pet_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Visit>, RepositoryError> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "SELECT id, pet_id, visit_date, description FROM visits WHERE pet_id IN (",
        );
        let mut separated = query.separated(", ");
        for pet_id in pet_ids {
            separated.push_bind(*pet_id);
        }
        separated.push_unseparated(") ORDER BY id");

        let rows = query
            .build_query_as::<VisitRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn insert(&self, visit: &NewVisit) -> Result<Visit, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO visits (pet_id, visit_date, description) VALUES (?, ?, ?)",
        )
        .bind(visit.pet_id)
        .bind(visit.date)
        .bind(&visit.description)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Visit::from_storage(result.last_insert_rowid(), visit.clone()))
    }
}
