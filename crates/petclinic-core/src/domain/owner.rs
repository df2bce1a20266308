//! Owner domain types.

use serde::{Deserialize, Serialize};

use super::pet::{OwnerRef, Pet};

/// The editable fields of an owner.
///
/// An owner that has not been persisted yet is just an `OwnerDetails`.
/// Every field is optional here; the resources decide which ones are
/// required before anything reaches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl AsMut<Self> for OwnerDetails {
    fn as_mut(&mut self) -> &mut Self {
        self
    }
}

/// A persisted owner.
///
/// The identifier is assigned by storage and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    id: i64,
    /// Contact details.
    pub details: OwnerDetails,
    /// Pets owned by this owner, in storage order.
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Rebuild an owner from a stored row.
    ///
    /// Only repository implementations should call this.
    pub const fn from_storage(id: i64, details: OwnerDetails, pets: Vec<Pet>) -> Self {
        Self { id, details, pets }
    }

    /// Storage-assigned identifier.
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Weak reference to this owner, as carried by its pets.
    pub fn to_ref(&self) -> OwnerRef {
        OwnerRef {
            id: self.id,
            first_name: self.details.first_name.clone(),
            last_name: self.details.last_name.clone(),
        }
    }

    /// Pets ordered by name.
    pub fn pets_by_name(&self) -> Vec<&Pet> {
        let mut pets: Vec<&Pet> = self.pets.iter().collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));
        pets
    }
}

impl AsMut<OwnerDetails> for Owner {
    fn as_mut(&mut self) -> &mut OwnerDetails {
        &mut self.details
    }
}

/// Request body for creating or updating an owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl OwnerRequest {
    /// Build a request with every field present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            address: Some(address.into()),
            city: Some(city.into()),
            telephone: Some(telephone.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PetType;

    fn pet(id: i64, name: &str) -> Pet {
        Pet::from_storage(
            id,
            crate::domain::NewPet {
                name: name.to_string(),
                birth_date: None,
                pet_type: PetType::new(1, "cat"),
                owner: OwnerRef::default(),
            },
        )
    }

    #[test]
    fn test_pets_by_name_sorts_without_touching_storage_order() {
        let owner = Owner::from_storage(
            3,
            OwnerDetails::default(),
            vec![pet(1, "Max"), pet(2, "Basil"), pet(3, "Leo")],
        );

        let names: Vec<&str> = owner.pets_by_name().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Basil", "Leo", "Max"]);
        assert_eq!(owner.pets[0].name, "Max");
    }

    #[test]
    fn test_to_ref_carries_id_and_name() {
        let owner = Owner::from_storage(
            7,
            OwnerDetails {
                first_name: Some("Jean".to_string()),
                last_name: Some("Coleman".to_string()),
                ..Default::default()
            },
            Vec::new(),
        );

        let owner_ref = owner.to_ref();
        assert_eq!(owner_ref.id, 7);
        assert_eq!(owner_ref.display_name(), "Jean Coleman");
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: OwnerRequest = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Doe","address":"123 Street","city":"City","telephone":"1234567890"}"#,
        )
        .unwrap();

        assert_eq!(
            request,
            OwnerRequest::new("Jane", "Doe", "123 Street", "City", "1234567890")
        );
    }
}
