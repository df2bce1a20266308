//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one resource. Handlers parse path
//! segments and bodies, delegate to the resource and pick the status code.

pub mod owners;
pub mod pets;
pub mod vets;
pub mod visits;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::HttpError;

/// Unwrap a JSON body, turning extractor rejections into a 400 error body.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload.map(|Json(body)| body).map_err(HttpError::from)
}
