//! CLI entry point.

use clap::Parser;

use petclinic_cli::{Cli, CliError, Commands, handlers, init_tracing};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command).await {
        tracing::error!(error = %err, "petclinic exited with an error");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve(args) => handlers::serve::execute(&args).await,
        Commands::Paths => handlers::paths::execute(),
    }
}
