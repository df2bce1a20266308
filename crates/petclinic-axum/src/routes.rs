//! Route definitions and router construction.
//!
//! Each service gets its own router. All of them answer `/health` and run
//! behind the same CORS and tracing layers.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{CorsConfig, CustomersContext, ServiceContext, VetsContext, VisitsContext};
use crate::handlers;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

fn with_common_layers(router: Router, cors_config: &CorsConfig) -> Router {
    router
        .route("/health", get(health_check))
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Router of the customers service: owners, pets and pet types.
pub fn customers_router(ctx: CustomersContext, cors_config: &CorsConfig) -> Router {
    let routes = Router::new()
        .route(
            "/owners",
            get(handlers::owners::list).post(handlers::owners::create),
        )
        .route(
            "/owners/{ownerId}",
            get(handlers::owners::get).put(handlers::owners::update),
        )
        .route("/petTypes", get(handlers::pets::pet_types))
        .route("/owners/{ownerId}/pets", post(handlers::pets::create))
        .route(
            "/owners/{ownerId}/pets/{petId}",
            get(handlers::pets::get).put(handlers::pets::update),
        )
        .with_state(Arc::new(ctx));

    with_common_layers(routes, cors_config)
}

/// Router of the vets service.
pub fn vets_router(ctx: VetsContext, cors_config: &CorsConfig) -> Router {
    let routes = Router::new()
        .route("/vets", get(handlers::vets::list))
        .with_state(Arc::new(ctx));

    with_common_layers(routes, cors_config)
}

/// Router of the visits service.
pub fn visits_router(ctx: VisitsContext, cors_config: &CorsConfig) -> Router {
    let routes = Router::new()
        .route(
            "/owners/{ownerId}/pets/{petId}/visits",
            get(handlers::visits::list_for_pet).post(handlers::visits::create),
        )
        .route("/pets/visits", get(handlers::visits::list_for_pets))
        .with_state(Arc::new(ctx));

    with_common_layers(routes, cors_config)
}

/// Router of whichever service `ctx` holds.
pub fn create_router(ctx: ServiceContext, cors_config: &CorsConfig) -> Router {
    match ctx {
        ServiceContext::Customers(ctx) => customers_router(ctx, cors_config),
        ServiceContext::Vets(ctx) => vets_router(ctx, cors_config),
        ServiceContext::Visits(ctx) => visits_router(ctx, cors_config),
    }
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}

