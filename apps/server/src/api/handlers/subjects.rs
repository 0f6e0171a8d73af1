//! Subject handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{acknowledge, json_payload};
use crate::{
    models::{NewSubject, SUBJECT_FIELDS_REQUIRED},
    state::AppState,
    Result,
};

/// GET /api/subjects
pub async fn list_subjects(State(state): State<AppState>) -> Result<Response> {
    let subjects = state.catalog_service.list_subjects().await?;
    Ok((StatusCode::OK, Json(subjects)).into_response())
}

/// POST /api/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewSubject>, JsonRejection>,
) -> Result<Response> {
    let payload = json_payload(payload, SUBJECT_FIELDS_REQUIRED)?;
    state.catalog_service.create_subject(payload).await?;
    Ok(acknowledge("Subject added successfully"))
}
