//! Request handlers

pub mod questions;
pub mod subjects;
pub mod system;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{Error, Result};

/// `{"message": ...}` acknowledgment with 200.
pub(crate) fn acknowledge(message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "message": message }))).into_response()
}

/// Turn an axum body rejection into a JSON `Validation` error instead of the
/// default plain-text 400/415/422.
pub(crate) fn json_payload<T>(
    payload: std::result::Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
            Err(Error::Validation(message.to_string()))
        }
    }
}

/// Same as [`json_payload`] for path segments, e.g. a non-numeric question id.
pub(crate) fn path_params<T>(path: std::result::Result<Path<T>, PathRejection>) -> Result<T> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(Error::Validation(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        ))),
    }
}
