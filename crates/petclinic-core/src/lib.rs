#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod service;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    NewPet, NewVisit, Owner, OwnerDetails, OwnerRef, OwnerRequest, Pet, PetRequest, PetType,
    Specialty, Vet, Visit, VisitRequest, Visits,
};
pub use ports::{
    CoreError, CustomerRepos, OwnerRepository, PetRepository, RepositoryError, VetRepository,
    VisitRepository,
};
pub use service::{ClinicService, UnknownServiceError};
pub use services::{
    OwnerResource, PetResource, VetResource, VisitResource, map_owner_request,
};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};

#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;
