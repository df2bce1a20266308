//! Subcommands of the `petclinic` binary.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use petclinic_core::ClinicService;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one service over HTTP
    Serve(ServeArgs),

    /// Show the database path of every service
    Paths,
}

/// Options of `petclinic serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Service to run: customers, vets or visits
    pub service: ClinicService,

    /// Port to listen on (defaults to the service's own port)
    #[arg(short, long, env = "PETCLINIC_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "PETCLINIC_BIND")]
    pub bind: Option<IpAddr>,

    /// SQLite database file (defaults to the per-service data path)
    #[arg(long, env = "PETCLINIC_DATABASE")]
    pub database: Option<PathBuf>,

    /// Don't load sample data into an empty database
    #[arg(long)]
    pub no_seed: bool,

    /// Allow CORS requests from this origin (repeatable; any origin when absent)
    #[arg(
        long = "allowed-origin",
        env = "PETCLINIC_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;

    use super::*;
    use clap::Parser;

    fn serve_args(args: &[&str]) -> ServeArgs {
        let argv = ["petclinic", "serve"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Serve(args) => args,
            Commands::Paths => panic!("expected serve"),
        }
    }

    #[test]
    fn test_serve_parses_service_case_insensitively() {
        assert_eq!(serve_args(&["Visits"]).service, ClinicService::Visits);
        assert_eq!(serve_args(&["vets"]).service, ClinicService::Vets);
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let err = Cli::try_parse_from(["petclinic", "serve", "billing"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown service 'billing'"));
    }

    #[test]
    fn test_serve_options() {
        let args = serve_args(&[
            "customers",
            "--port",
            "9081",
            "--bind",
            "127.0.0.1",
            "--database",
            "/srv/petclinic/customers.db",
            "--no-seed",
            "--allowed-origin",
            "http://localhost:4200",
            "--allowed-origin",
            "https://clinic.example",
        ]);

        assert_eq!(args.service, ClinicService::Customers);
        assert_eq!(args.port, Some(9081));
        assert_eq!(args.bind, Some(IpAddr::from([127, 0, 0, 1])));
        assert_eq!(
            args.database,
            Some(PathBuf::from("/srv/petclinic/customers.db"))
        );
        assert!(args.no_seed);
        assert_eq!(
            args.allowed_origins,
            vec!["http://localhost:4200", "https://clinic.example"]
        );
    }

    #[test]
    fn test_comma_separated_origins() {
        let args = serve_args(&["vets", "--allowed-origin", "http://a.test,http://b.test"]);
        assert_eq!(args.allowed_origins.len(), 2);
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(Cli::try_parse_from(["petclinic", "serve", "vets", "--port", "70000"]).is_err());
    }
}
