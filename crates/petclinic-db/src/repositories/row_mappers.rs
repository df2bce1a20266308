//! Row mapping helpers shared by the `SQLite` repositories.

use chrono::NaiveDate;
use petclinic_core::{NewPet, OwnerRef, Pet, PetType, RepositoryError};
use sqlx::error::ErrorKind;

/// Pet columns joined with their type and owner name.
///
/// Callers append a `WHERE` and `ORDER BY` clause.
pub const PET_SELECT: &str = r"
    SELECT p.id, p.name, p.birth_date, p.owner_id,
           t.id AS type_id, t.name AS type_name,
           o.first_name AS owner_first_name, o.last_name AS owner_last_name
    FROM pets p
    JOIN types t ON t.id = p.type_id
    JOIN owners o ON o.id = p.owner_id
";

#[derive(sqlx::FromRow)]
pub struct PetRow {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: i64,
    pub type_id: i64,
    pub type_name: String,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Self::from_storage(
            row.id,
            NewPet {
                name: row.name,
                birth_date: row.birth_date,
                pet_type: PetType::new(row.type_id, row.type_name),
                owner: OwnerRef {
                    id: row.owner_id,
                    first_name: row.owner_first_name,
                    last_name: row.owner_last_name,
                },
            },
        )
    }
}

/// Map `SQLx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => RepositoryError::Constraint(db.message().to_string()),
            _ => RepositoryError::Storage(e.to_string()),
        },
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(e.to_string())
        }
        _ => RepositoryError::Storage(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_row_into_domain() {
        let pet: Pet = PetRow {
            id: 2,
            name: "Basil".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2012, 8, 6),
            owner_id: 2,
            type_id: 6,
            type_name: "hamster".to_string(),
            owner_first_name: Some("Betty".to_string()),
            owner_last_name: Some("Davis".to_string()),
        }
        .into();

        assert_eq!(pet.id(), 2);
        assert_eq!(pet.pet_type, PetType::new(6, "hamster"));
        assert_eq!(pet.owner.display_name(), "Betty Davis");
    }

    #[test]
    fn test_pool_errors_are_storage_failures() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::Storage(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::Storage(_)
        ));
    }
}
