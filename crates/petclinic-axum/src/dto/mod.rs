//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Owner and pet DTOs decouple the stored entities from their wire shape:
//! an owner renders its pets without back-references, and pet details
//! render the owner as a display name. Vets and visits serialize straight
//! from the domain types.

mod owner;

pub use owner::{OwnerDto, OwnerPetDto, PetDetailsDto};
