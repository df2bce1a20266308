//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use petclinic_axum::bootstrap::{CorsConfig, CustomersContext, VetsContext, VisitsContext};
use petclinic_axum::routes::{customers_router, vets_router, visits_router};
use petclinic_core::ClinicService;
use petclinic_db::TestDb;

/// Customers router over an in-memory database loaded with the sample data.
pub async fn customers_app() -> Router {
    let db = TestDb::seeded(ClinicService::Customers).await.unwrap();
    customers_router(CustomersContext::new(db.customer_repos()), &CorsConfig::AllowAll)
}

/// Vets router over an in-memory database loaded with the sample data.
pub async fn vets_app() -> Router {
    let db = TestDb::seeded(ClinicService::Vets).await.unwrap();
    vets_router(VetsContext::new(db.vet_repository()), &CorsConfig::AllowAll)
}

/// Visits router over an empty in-memory database.
pub async fn empty_visits_app() -> Router {
    let db = TestDb::new(ClinicService::Visits).await.unwrap();
    visits_router(VisitsContext::new(db.visit_repository()), &CorsConfig::AllowAll)
}

/// Visits router over an in-memory database loaded with the sample data.
pub async fn visits_app() -> Router {
    let db = TestDb::seeded(ClinicService::Visits).await.unwrap();
    visits_router(VisitsContext::new(db.visit_repository()), &CorsConfig::AllowAll)
}

/// Send one request and return the status with the raw body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Send one request and parse the body as JSON.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
