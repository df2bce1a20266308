//! Resources - the request-handling layer.
//!
//! Each resource serves one entity family. Resources validate identifiers,
//! check existence through the injected repositories, map request bodies
//! onto entities and persist them. They hold no mutable state; consistency
//! under concurrent updates is left to storage.

mod owner_mapper;
mod owner_resource;
mod pet_resource;
mod vet_resource;
mod visit_resource;

pub use owner_mapper::map_owner_request;
pub use owner_resource::OwnerResource;
pub use pet_resource::PetResource;
pub use vet_resource::VetResource;
pub use visit_resource::VisitResource;
