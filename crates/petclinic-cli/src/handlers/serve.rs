//! Serve command handler.

use petclinic_axum::start_server;
use tracing::info;

use crate::bootstrap::server_config;
use crate::commands::ServeArgs;
use crate::error::CliError;

/// Run one service until Ctrl-C.
pub async fn execute(args: &ServeArgs) -> Result<(), CliError> {
    let config = server_config(args)?;

    info!(
        service = %config.service,
        addr = %config.socket_addr(),
        seed = config.seed,
        "Starting service"
    );

    start_server(config).await?;
    Ok(())
}
