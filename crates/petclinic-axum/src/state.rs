//! Shared application state types.
//!
//! Each service router carries only its own context.

use crate::bootstrap::{CustomersContext, VetsContext, VisitsContext};
use std::sync::Arc;

/// State of the customers service handlers.
pub type CustomersState = Arc<CustomersContext>;

/// State of the vets service handlers.
pub type VetsState = Arc<VetsContext>;

/// State of the visits service handlers.
pub type VisitsState = Arc<VisitsContext>;
