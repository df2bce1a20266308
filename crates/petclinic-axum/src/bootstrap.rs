//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use petclinic_core::{
    ClinicService, CustomerRepos, OwnerResource, PetResource, VetRepository, VetResource,
    VisitRepository, VisitResource, database_path,
};
use petclinic_db::{CoreFactory, SqlitePool, setup_database};
use tokio::net::TcpListener;
use tracing::info;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for one service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Which service this process serves.
    pub service: ClinicService,
    /// Address to bind.
    pub bind: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file; `None` resolves the default per-service path.
    pub database_path: Option<PathBuf>,
    /// Load sample data into an empty database.
    pub seed: bool,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Config with the service's default port on all interfaces.
    pub const fn for_service(service: ClinicService) -> Self {
        Self {
            service,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: service.default_port(),
            database_path: None,
            seed: true,
            cors: CorsConfig::AllowAll,
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Use an explicit database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Socket address to listen on.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    fn resolve_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(database_path(self.service)?),
        }
    }
}

/// Resources of the customers service.
pub struct CustomersContext {
    pub owners: OwnerResource,
    pub pets: PetResource,
}

impl CustomersContext {
    pub fn new(repos: CustomerRepos) -> Self {
        Self {
            owners: OwnerResource::new(Arc::clone(&repos.owners)),
            pets: PetResource::new(repos.owners, repos.pets),
        }
    }
}

/// Resources of the vets service.
pub struct VetsContext {
    pub vets: VetResource,
}

impl VetsContext {
    pub fn new(repo: Arc<dyn VetRepository>) -> Self {
        Self {
            vets: VetResource::new(repo),
        }
    }
}

/// Resources of the visits service.
pub struct VisitsContext {
    pub visits: VisitResource,
}

impl VisitsContext {
    pub fn new(repo: Arc<dyn VisitRepository>) -> Self {
        Self {
            visits: VisitResource::new(repo),
        }
    }
}

/// Initialized context of whichever service this process runs.
pub enum ServiceContext {
    Customers(CustomersContext),
    Vets(VetsContext),
    Visits(VisitsContext),
}

impl ServiceContext {
    /// Wire a service's repositories over an open pool.
    pub fn from_pool(service: ClinicService, pool: SqlitePool) -> Self {
        match service {
            ClinicService::Customers => {
                Self::Customers(CustomersContext::new(CoreFactory::build_customer_repos(pool)))
            }
            ClinicService::Vets => Self::Vets(VetsContext::new(CoreFactory::vet_repository(pool))),
            ClinicService::Visits => {
                Self::Visits(VisitsContext::new(CoreFactory::visit_repository(pool)))
            }
        }
    }
}

/// Open the service's database and build its context.
pub async fn bootstrap(config: &ServerConfig) -> Result<ServiceContext> {
    let db_path = config.resolve_database_path()?;

    info!(
        target: "petclinic.paths",
        service = %config.service,
        database_path = %db_path.display(),
        seed = config.seed,
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path, config.service, config.seed).await?;
    Ok(ServiceContext::from_pool(config.service, pool))
}

/// Start the web server for the configured service.
///
/// Runs until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(
        service = %config.service,
        "petclinic {} service listening on http://{}", config.service, addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(service = %config.service, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
