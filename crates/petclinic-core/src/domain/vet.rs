//! Veterinarian domain types.

use serde::{Deserialize, Serialize};

/// A veterinary specialty (radiology, surgery, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

impl Specialty {
    /// Create a specialty.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A veterinarian with their specialties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Always rendered as a sequence, empty when the vet has none.
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

impl Vet {
    /// Sort specialties by name, case-sensitive.
    ///
    /// The sort is stable: specialties with equal names keep their
    /// insertion order.
    pub fn sort_specialties(&mut self) {
        self.specialties.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vet(specialties: Vec<Specialty>) -> Vet {
        Vet {
            id: 3,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            specialties,
        }
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let mut v = vet(vec![
            Specialty::new(1, "surgery"),
            Specialty::new(2, "Radiology"),
            Specialty::new(3, "dentistry"),
        ]);
        v.sort_specialties();

        let names: Vec<&str> = v.specialties.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Radiology", "dentistry", "surgery"]);
    }

    #[test]
    fn test_sort_keeps_insertion_order_on_ties() {
        let mut v = vet(vec![
            Specialty::new(9, "surgery"),
            Specialty::new(4, ""),
            Specialty::new(2, "surgery"),
        ]);
        v.sort_specialties();

        let ids: Vec<i64> = v.specialties.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 9, 2]);
    }

    #[test]
    fn test_missing_specialties_render_as_empty_array() {
        let parsed: Vet =
            serde_json::from_str(r#"{"id": 2, "firstName": "Jane", "lastName": "Smith"}"#).unwrap();
        assert!(parsed.specialties.is_empty());

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["specialties"], serde_json::json!([]));
    }
}
