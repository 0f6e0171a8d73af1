//! Health and diagnostic handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::acknowledge;
use crate::{state::AppState, Result};

/// GET /health
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// GET /api/test - confirms the store answers.
pub async fn test_connection(State(state): State<AppState>) -> Result<Response> {
    state.catalog_service.check_store().await?;
    Ok(acknowledge("Store connected successfully!"))
}
