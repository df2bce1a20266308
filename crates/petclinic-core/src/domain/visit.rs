//! Visit domain types.
//!
//! The visits service never holds a `Pet`; a visit only carries the pet's
//! identifier as a plain value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A visit to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub pet_id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// A persisted visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    id: i64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub pet_id: i64,
}

impl Visit {
    /// Rebuild a visit from a stored row.
    pub fn from_storage(id: i64, visit: NewVisit) -> Self {
        Self {
            id,
            date: visit.date,
            description: visit.description,
            pet_id: visit.pet_id,
        }
    }

    /// Storage-assigned identifier.
    pub const fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for creating a visit.
///
/// A `petId` in the body is ignored in favor of the one in the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pet_id: Option<i64>,
}

/// Result of a batch visit lookup.
///
/// Wrapped in a named field rather than rendered as a bare array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Visits {
    pub items: Vec<Visit>,
}
