//! CLI-specific error types and mappings.
//!
//! Maps `PathError` and composition-root failures to exit codes and
//! user-facing messages.

use petclinic_core::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error not caught by the parser.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (bind failure, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (data directory).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Server(_) => 70, // EX_SOFTWARE
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(path_err) = err.downcast_ref::<PathError>() {
            return Self::Config(path_err.to_string());
        }
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            return Self::Io(io_err.to_string());
        }
        Self::Server(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_is_configuration() {
        let err = CliError::from(PathError::NoDataDir);
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_anyhow_keeps_io_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = CliError::from(anyhow::Error::new(io));
        assert!(matches!(err, CliError::Io(ref msg) if msg.contains("address in use")));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_anyhow_other_is_server_failure() {
        let err = CliError::from(anyhow::anyhow!("pool closed").context("serving visits"));
        assert_eq!(err.exit_code(), 70);
        assert_eq!(err.to_string(), "Server error: serving visits: pool closed");
    }
}
