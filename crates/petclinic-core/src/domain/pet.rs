//! Pet domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of animal (cat, dog, ...). Reference data, never created by the
/// resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: i64,
    pub name: String,
}

impl PetType {
    /// Create a pet type.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Weak back-reference from a pet to its owner.
///
/// Held by value; a pet never owns its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerRef {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl OwnerRef {
    /// "First Last", skipping whichever part is missing.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A pet to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: PetType,
    pub owner: OwnerRef,
}

/// A persisted pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: PetType,
    pub owner: OwnerRef,
}

impl Pet {
    /// Rebuild a pet from a stored row.
    pub fn from_storage(id: i64, pet: NewPet) -> Self {
        Self {
            id,
            name: pet.name,
            birth_date: pet.birth_date,
            pet_type: pet.pet_type,
            owner: pet.owner,
        }
    }

    /// Storage-assigned identifier.
    pub const fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for creating or updating a pet.
///
/// `id` is accepted for compatibility with clients that echo it back, but
/// the path identifier is always the one used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub type_id: i64,
}
