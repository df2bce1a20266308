//! Core domain types.
//!
//! These types represent the clinic's entities, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `owner` - Owners and the owner request shape
//! - `pet` - Pets, pet types and the pet request shape
//! - `vet` - Veterinarians and their specialties
//! - `visit` - Visits, keyed by pet id only
//!
//! Persisted entities keep their identifier private. Only storage assigns it
//! (through `from_storage`), so no domain API can rewrite an id.

mod owner;
mod pet;
mod vet;
mod visit;

pub use owner::{Owner, OwnerDetails, OwnerRequest};
pub use pet::{NewPet, OwnerRef, Pet, PetRequest, PetType};
pub use vet::{Specialty, Vet};
pub use visit::{NewVisit, Visit, VisitRequest, Visits};
