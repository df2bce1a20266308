#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    CorsConfig, CustomersContext, ServerConfig, ServiceContext, VetsContext, VisitsContext,
    bootstrap, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, customers_router, vets_router, visits_router};
