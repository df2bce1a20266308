//! CLI bootstrap: logging and server configuration.
//!
//! Turns parsed arguments into the `ServerConfig` the Axum adapter runs
//! with. Database and repositories are wired by `petclinic_axum::bootstrap`.

use petclinic_axum::ServerConfig;
use tracing_subscriber::EnvFilter;

use crate::commands::ServeArgs;
use crate::error::CliError;

/// Default filter directive when `RUST_LOG` is unset.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `--verbose` when both are present.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the server configuration for `petclinic serve`.
pub fn server_config(args: &ServeArgs) -> Result<ServerConfig, CliError> {
    let mut config = ServerConfig::for_service(args.service);

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(path) = &args.database {
        config = config.with_database_path(path.clone());
    }
    config.seed = !args.no_seed;

    if !args.allowed_origins.is_empty() {
        let origins = validate_origins(&args.allowed_origins)?;
        config = config.with_allowed_origins(origins);
    }

    Ok(config)
}

fn validate_origins(origins: &[String]) -> Result<Vec<String>, CliError> {
    origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin.starts_with("http://") || origin.starts_with("https://") {
                Ok(origin.trim_end_matches('/').to_string())
            } else {
                Err(CliError::Arguments(format!(
                    "allowed origin '{origin}' must start with http:// or https://"
                )))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use petclinic_axum::CorsConfig;
    use petclinic_core::ClinicService;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;
    use tokio_test::{assert_err, assert_ok};

    fn args(service: ClinicService) -> ServeArgs {
        ServeArgs {
            service,
            port: None,
            bind: None,
            database: None,
            no_seed: false,
            allowed_origins: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_follow_service() {
        let config = assert_ok!(server_config(&args(ClinicService::Vets)));
        assert_eq!(config.port, 8083);
        assert_eq!(config.bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(config.seed);
        assert!(config.database_path.is_none());
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_overrides_are_applied() {
        let mut serve = args(ClinicService::Customers);
        serve.port = Some(9000);
        serve.bind = Some(IpAddr::V4(Ipv4Addr::LOCALHOST));
        serve.database = Some(PathBuf::from("/var/lib/petclinic/customers.db"));
        serve.no_seed = true;
        serve.allowed_origins = vec!["http://localhost:4200/".to_string(), " ".to_string()];

        let config = assert_ok!(server_config(&serve));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.database_path,
            Some(PathBuf::from("/var/lib/petclinic/customers.db"))
        );
        assert!(!config.seed);
        assert!(matches!(
            config.cors,
            CorsConfig::AllowOrigins(ref o) if o == &["http://localhost:4200"]
        ));
    }

    #[test]
    fn test_origin_without_scheme_is_rejected() {
        let mut serve = args(ClinicService::Visits);
        serve.allowed_origins = vec!["localhost:4200".to_string()];

        let err = assert_err!(server_config(&serve));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }
}
