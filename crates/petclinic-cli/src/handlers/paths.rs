//! Paths command handler.
//!
//! Prints where each service keeps its database, one `service = path` line
//! per service.

use std::fmt::Write;
use std::path::PathBuf;

use petclinic_core::{ClinicService, database_path};

use crate::error::CliError;

/// Resolve and print the database path of every service.
pub fn execute() -> Result<(), CliError> {
    let entries = ClinicService::ALL
        .into_iter()
        .map(|service| database_path(service).map(|path| (service, path)))
        .collect::<Result<Vec<_>, _>>()?;

    print!("{}", render(&entries));
    Ok(())
}

fn render(entries: &[(ClinicService, PathBuf)]) -> String {
    let mut out = String::new();
    for (service, path) in entries {
        let _ = writeln!(out, "{:<9} = {}", service.name(), path.display());
    }
    out
}
