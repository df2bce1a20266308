//! Database path resolution.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;
use crate::service::ClinicService;

/// Get the path to a service's database file.
///
/// Returns `<data root>/data/<service>.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path(service: ClinicService) -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(format!("{}.db", service.name())))
}
