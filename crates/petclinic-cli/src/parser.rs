//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface of the pet clinic services.
#[derive(Parser)]
#[command(name = "petclinic")]
#[command(about = "Run the pet clinic customers, vets and visits services")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["petclinic", "paths", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Paths));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["petclinic"]).is_err());
    }
}
