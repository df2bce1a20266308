//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub(super) const DATA_DIR_ENV: &str = "PETCLINIC_DATA_DIR";

/// Get the root directory for service data.
///
/// Resolution order:
/// 1. `PETCLINIC_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/petclinic`)
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = resolve_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::data_local_dir())?;

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

fn resolve_root(
    env_override: Option<PathBuf>,
    system_data: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    system_data
        .map(|dir| dir.join("petclinic"))
        .ok_or(PathError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let root = resolve_root(
            Some(PathBuf::from("/srv/clinic")),
            Some(PathBuf::from("/home/u/.local/share")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/srv/clinic"));
    }

    #[test]
    fn test_empty_override_falls_back_to_system_dir() {
        let root = resolve_root(Some(PathBuf::new()), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(root, PathBuf::from("/data/petclinic"));
    }

    #[test]
    fn test_no_system_dir() {
        assert!(matches!(resolve_root(None, None), Err(PathError::NoDataDir)));
    }
}
