//! The three independently deployable services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the clinic services. Each owns its own database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicService {
    /// Owners, pets and pet types.
    Customers,
    /// Veterinarians and specialties.
    Vets,
    /// Visits, keyed by pet id.
    Visits,
}

impl ClinicService {
    /// Every service, in startup order.
    pub const ALL: [Self; 3] = [Self::Customers, Self::Vets, Self::Visits];

    /// Lowercase name, also used as the database file stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Vets => "vets",
            Self::Visits => "visits",
        }
    }

    /// Port the service listens on unless configured otherwise.
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Customers => 8081,
            Self::Visits => 8082,
            Self::Vets => 8083,
        }
    }
}

impl fmt::Display for ClinicService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A service name that doesn't match any known service.
#[derive(Debug, Error)]
#[error("unknown service '{0}' (expected customers, vets or visits)")]
pub struct UnknownServiceError(pub String);

impl FromStr for ClinicService {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownServiceError(s.to_string()))
    }
}
