//! Owner and pet DTOs.

use chrono::NaiveDate;
use petclinic_core::{Owner, Pet, PetType};
use serde::Serialize;

/// An owner with the pets it owns, sorted by name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    pub pets: Vec<OwnerPetDto>,
}

/// A pet as listed under its owner. No owner back-reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPetDto {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: PetType,
}

/// A single pet with its owner rendered as "First Last".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetailsDto {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: PetType,
}

impl From<&Pet> for OwnerPetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id(),
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type.clone(),
        }
    }
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        let pets = owner
            .pets_by_name()
            .into_iter()
            .map(OwnerPetDto::from)
            .collect();
        let id = owner.id();
        let details = owner.details;

        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            address: details.address,
            city: details.city,
            telephone: details.telephone,
            pets,
        }
    }
}

impl From<Pet> for PetDetailsDto {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id(),
            owner: pet.owner.display_name(),
            name: pet.name,
            birth_date: pet.birth_date,
            pet_type: pet.pet_type,
        }
    }
}
